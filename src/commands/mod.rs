pub mod export;
pub mod scores;
pub mod standings;
pub mod text;

pub use text::TextRenderer;

use anyhow::{bail, Result};

use crate::team_abbrev::{Grouping, DIVISIONS};

/// Look up a standings grouping by name, ignoring case ("al east", "NL Wild Card")
pub fn find_grouping(name: &str) -> Result<&'static Grouping> {
    let wanted = name.trim();
    match DIVISIONS.iter().find(|g| g.name.eq_ignore_ascii_case(wanted)) {
        Some(grouping) => Ok(grouping),
        None => {
            let known: Vec<&str> = DIVISIONS.iter().map(|g| g.name).collect();
            bail!("Unknown division '{}'. Use one of: {}", name, known.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_grouping() {
        assert_eq!(find_grouping("al east").unwrap().name, "AL East");
        assert_eq!(find_grouping(" NL Wild Card ").unwrap().name, "NL Wild Card");
    }

    #[test]
    fn test_unknown_grouping_lists_choices() {
        let err = find_grouping("Atlantic").unwrap_err().to_string();
        assert!(err.contains("Unknown division 'Atlantic'"));
        assert!(err.contains("AL Central"));
    }
}
