use crate::{
    error::GeneratorError,
    models::{Direction, DirectionSet},
};

/// Turn the author's direction toggles into the list the placement search
/// draws from. Fails fast when nothing is enabled.
pub fn resolve_directions(allowed: &DirectionSet) -> Result<Vec<Direction>, GeneratorError> {
    let directions: Vec<Direction> = allowed.iter().collect();
    if directions.is_empty() {
        return Err(GeneratorError::NoDirectionsSelected);
    }
    Ok(directions)
}

/// Parse a comma separated list such as `right,down,upLeft`.
pub fn parse_direction_list(list: &str) -> Result<DirectionSet, GeneratorError> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse::<Direction>)
        .collect()
}
