//! Interactive command loop over a loaded registry
//!
//! The loop reads one command per line, runs it against the registry and
//! writes the reply. Command-time failures are reported and the loop goes on;
//! only `q` or end of input stop it.

use crate::core::commands::Command;
use crate::core::models::{AddOutcome, DeleteOutcome, Registry};
use crate::{debug, warn};
use std::io::{self, BufRead, Write};

/// Menu shown before every command
pub const MENU: &str = "[A]dd / [C]redits / [D]elete / [P]rint all / p[R]int department / [Q]uit";

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Stop the loop
    Quit,
}

/// Run one command against the registry and build the text to show the user
///
/// Every reply except the ones for `q` and invalid commands ends with a blank
/// line.
pub fn execute(registry: &mut Registry, command: &Command) -> (String, Flow) {
    let reply = match command {
        Command::Add {
            department,
            name_words,
            credits,
        } => match registry.add_course(department, name_words.as_slice(), credits) {
            Ok((course, AddOutcome::AddedToExisting)) => {
                format!("Added course {} to department {department}\n\n", course.name)
            }
            Ok((course, AddOutcome::CreatedDepartment)) => {
                format!("Added department {department} with course {}\n\n", course.name)
            }
            Err(e) => {
                warn!("Add rejected: {e}");
                format!("{e}\n\n")
            }
        },
        Command::Credits(department) => match registry.department_credits(department) {
            Ok(total) => format!("Department {department} has to offer {total} cr.\n\n"),
            Err(_) => "Department not found!\n\n".to_string(),
        },
        Command::Delete { department, course } => {
            match registry.delete(department, course.as_deref()) {
                Ok(DeleteOutcome::DepartmentRemoved) => {
                    format!("Department {department} removed.\n\n")
                }
                Ok(DeleteOutcome::CourseRemoved(removed)) => {
                    format!(
                        "Department {department} course {} removed.\n\n",
                        removed.name
                    )
                }
                Err(e) => format!("{e}\n\n"),
            }
        }
        Command::PrintAll => format!("{}\n", registry.render_all()),
        Command::PrintDepartment(department) => registry
            .render_department(department)
            .map_or_else(|_| "Department not found!\n\n".to_string(), |s| s + "\n"),
        Command::Quit => return ("Ending program.\n".to_string(), Flow::Quit),
        Command::Invalid => "Invalid command!\n".to_string(),
    };
    (reply, Flow::Continue)
}

/// Drive the command loop until `q` or end of input
///
/// # Arguments
/// * `registry` - Registry to operate on; edits stay in memory
/// * `input` - Source of command lines
/// * `output` - Destination for prompts and replies
///
/// # Errors
/// Returns an error only when reading input or writing output fails
pub fn run<R: BufRead, W: Write>(registry: &mut Registry, mut input: R, mut output: W) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{MENU}\nEnter command: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input, leaving command loop");
            writeln!(output)?;
            break;
        }
        writeln!(output)?;

        let command = Command::parse(line.trim_end_matches(['\n', '\r']));
        debug!("Command: {command:?}");

        let (reply, flow) = execute(registry, &command);
        output.write_all(reply.as_bytes())?;
        if flow == Flow::Quit {
            break;
        }
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;
    use std::io::Cursor;

    fn sample() -> Registry {
        let mut registry = Registry::new();
        registry.insert("CS", Course::new("Algorithms", 5));
        registry.insert("MATH", Course::new("Calculus", 10));
        registry
    }

    fn reply(registry: &mut Registry, line: &str) -> String {
        execute(registry, &Command::parse(line)).0
    }

    #[test]
    fn test_add_messages() {
        let mut registry = sample();
        assert_eq!(
            reply(&mut registry, "a CS Data Structures 5"),
            "Added course Data Structures to department CS\n\n"
        );
        assert_eq!(
            reply(&mut registry, "a PHYS Optics 4"),
            "Added department PHYS with course Optics\n\n"
        );
        assert_eq!(
            reply(&mut registry, "a PHYS Optics four"),
            "Invalid credits: 'four'\n\n"
        );
        assert_eq!(registry.courses("PHYS").unwrap().len(), 1);
    }

    #[test]
    fn test_delete_messages() {
        let mut registry = sample();
        assert_eq!(
            reply(&mut registry, "d ART"),
            "Department ART not found!\n\n"
        );
        assert_eq!(
            reply(&mut registry, "d CS Compilers"),
            "Course Compilers from CS not found!\n\n"
        );
        assert_eq!(
            reply(&mut registry, "d CS Algorithms"),
            "Department CS course Algorithms removed.\n\n"
        );
        assert_eq!(reply(&mut registry, "d MATH"), "Department MATH removed.\n\n");
    }

    #[test]
    fn test_read_messages() {
        let mut registry = sample();
        assert_eq!(
            reply(&mut registry, "c MATH"),
            "Department MATH has to offer 10 cr.\n\n"
        );
        assert_eq!(reply(&mut registry, "c ART"), "Department not found!\n\n");
        assert_eq!(
            reply(&mut registry, "r CS"),
            "*CS*\nAlgorithms : 5 cr\n\n"
        );
        assert_eq!(reply(&mut registry, "r ART"), "Department not found!\n\n");
        assert_eq!(
            reply(&mut registry, "p"),
            "*CS*\nAlgorithms : 5 cr\n*MATH*\nCalculus : 10 cr\n\n"
        );
    }

    #[test]
    fn test_quit_and_invalid() {
        let mut registry = sample();
        assert_eq!(
            execute(&mut registry, &Command::Quit),
            ("Ending program.\n".to_string(), Flow::Quit)
        );
        assert_eq!(
            execute(&mut registry, &Command::Invalid),
            ("Invalid command!\n".to_string(), Flow::Continue)
        );
    }

    #[test]
    fn test_run_stops_at_quit() {
        let mut registry = sample();
        let input = Cursor::new("a CS Compilers 6\nq\na CS Ignored 1\n");
        let mut output = Vec::new();

        run(&mut registry, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with(MENU));
        assert!(text.contains("Added course Compilers to department CS"));
        assert!(text.ends_with("Ending program.\n"));
        assert_eq!(registry.courses("CS").unwrap().len(), 2);
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut registry = sample();
        let input = Cursor::new("c CS\r\n");
        let mut output = Vec::new();

        run(&mut registry, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Department CS has to offer 5 cr."));
        assert_eq!(text.matches("Enter command: ").count(), 2);
    }
}
