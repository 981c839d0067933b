//! Command parsing for the interactive loop
//!
//! Each input line becomes one [`Command`]. Commands start with a
//! case-sensitive single letter; `a`, `c`, `d` and `r` must be followed by a
//! space, `p` and `q` must stand alone.

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `a <dept> <word>... <credits>`
    Add {
        /// Department key
        department: String,
        /// Words of the course name
        name_words: Vec<String>,
        /// Credits exactly as typed; validated when the command runs
        credits: String,
    },
    /// `d <dept> [course...]`
    Delete {
        /// Department key
        department: String,
        /// Course name (rest of the line) or `None` for the whole department
        course: Option<String>,
    },
    /// `p`
    PrintAll,
    /// `r <dept>`
    PrintDepartment(String),
    /// `c <dept>`
    Credits(String),
    /// `q`
    Quit,
    /// Anything else, including known commands with the wrong argument count
    Invalid,
}

impl Command {
    /// Parse one input line (without its line terminator)
    #[must_use]
    pub fn parse(line: &str) -> Self {
        if line == "p" {
            return Self::PrintAll;
        }
        if line == "q" {
            return Self::Quit;
        }

        match line.get(..2).unwrap_or_default() {
            "a " => Self::parse_add(line),
            "c " => match split_max(line, 1)[..] {
                [_, department] => Self::Credits(department.to_string()),
                _ => Self::Invalid,
            },
            "r " => match split_max(line, 1)[..] {
                [_, department] => Self::PrintDepartment(department.to_string()),
                _ => Self::Invalid,
            },
            "d " => match split_max(line, 2)[..] {
                [_, department] => Self::Delete {
                    department: department.to_string(),
                    course: None,
                },
                [_, department, course] => Self::Delete {
                    department: department.to_string(),
                    course: Some(course.to_string()),
                },
                _ => Self::Invalid,
            },
            _ => Self::Invalid,
        }
    }

    fn parse_add(line: &str) -> Self {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[..] {
            [_, department, ref name @ .., credits] if !name.is_empty() => Self::Add {
                department: department.to_string(),
                name_words: name.iter().map(ToString::to_string).collect(),
                credits: credits.to_string(),
            },
            _ => Self::Invalid,
        }
    }
}

/// Split on runs of whitespace at most `max_splits` times
///
/// The final piece is the untouched remainder of the line, trimmed at both
/// ends, so it may itself contain spaces (multi-word course names).
fn split_max(line: &str, max_splits: usize) -> Vec<&str> {
    let mut parts = Vec::with_capacity(max_splits + 1);
    let mut rest = line.trim();

    while !rest.is_empty() {
        if parts.len() == max_splits {
            parts.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                parts.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                parts.push(rest);
                break;
            }
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_max() {
        assert_eq!(split_max("d CS Data Structures", 2), vec!["d", "CS", "Data Structures"]);
        assert_eq!(split_max("d  CS", 2), vec!["d", "CS"]);
        assert_eq!(split_max("c CS extra", 1), vec!["c", "CS extra"]);
        assert_eq!(split_max("d ", 2), vec!["d"]);
        assert!(split_max("   ", 3).is_empty());
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("a PHYS Quantum Mechanics 8"),
            Command::Add {
                department: "PHYS".to_string(),
                name_words: vec!["Quantum".to_string(), "Mechanics".to_string()],
                credits: "8".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_keeps_bad_credits_for_later() {
        assert_eq!(
            Command::parse("a CS Algorithms many"),
            Command::Add {
                department: "CS".to_string(),
                name_words: vec!["Algorithms".to_string()],
                credits: "many".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_too_short() {
        assert_eq!(Command::parse("a CS 5"), Command::Invalid);
        assert_eq!(Command::parse("a CS"), Command::Invalid);
        assert_eq!(Command::parse("a "), Command::Invalid);
    }

    #[test]
    fn test_parse_delete() {
        assert_eq!(
            Command::parse("d CS"),
            Command::Delete {
                department: "CS".to_string(),
                course: None,
            }
        );
        assert_eq!(
            Command::parse("d CS Data  Structures"),
            Command::Delete {
                department: "CS".to_string(),
                course: Some("Data  Structures".to_string()),
            }
        );
        assert_eq!(Command::parse("d "), Command::Invalid);
    }

    #[test]
    fn test_parse_single_department_commands() {
        assert_eq!(Command::parse("c CS"), Command::Credits("CS".to_string()));
        assert_eq!(
            Command::parse("r MATH"),
            Command::PrintDepartment("MATH".to_string())
        );
        assert_eq!(Command::parse("c "), Command::Invalid);
        assert_eq!(Command::parse("r    "), Command::Invalid);
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(Command::parse("p"), Command::PrintAll);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("p "), Command::Invalid);
        assert_eq!(Command::parse("Q"), Command::Invalid);
        assert_eq!(Command::parse(""), Command::Invalid);
        assert_eq!(Command::parse("x CS"), Command::Invalid);
        assert_eq!(Command::parse("add CS Algorithms 5"), Command::Invalid);
    }
}
