//! Course model

use std::fmt;

/// A course offered by a department
///
/// Courses have no identity beyond their value. Ordering is by name first and
/// credits second, which is the order courses are listed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Course {
    /// Course name (may contain spaces, e.g. "Quantum Mechanics")
    pub name: String,

    /// Credit value; any `i64`, negative and zero included
    pub credits: i64,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `name` - Full course name
    /// * `credits` - Credit value
    #[must_use]
    pub fn new(name: impl Into<String>, credits: i64) -> Self {
        Self {
            name: name.into(),
            credits,
        }
    }

    /// Build a course name from whitespace-separated words, joined by single spaces
    #[must_use]
    pub fn name_from_words<S: AsRef<str>>(words: &[S]) -> String {
        words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} cr", self.name, self.credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("Algorithms", 5);

        assert_eq!(course.name, "Algorithms");
        assert_eq!(course.credits, 5);
    }

    #[test]
    fn test_display_format() {
        let course = Course::new("Quantum Mechanics", 8);
        assert_eq!(course.to_string(), "Quantum Mechanics : 8 cr");
    }

    #[test]
    fn test_ordering_name_then_credits() {
        let mut courses = vec![
            Course::new("Databases", 5),
            Course::new("Algorithms", 7),
            Course::new("Algorithms", 3),
        ];
        courses.sort();

        assert_eq!(
            courses,
            vec![
                Course::new("Algorithms", 3),
                Course::new("Algorithms", 7),
                Course::new("Databases", 5),
            ]
        );
    }

    #[test]
    fn test_name_from_words() {
        assert_eq!(
            Course::name_from_words(&["Data", "Structures", "II"]),
            "Data Structures II"
        );
        assert_eq!(Course::name_from_words::<&str>(&[]), "");
    }

    #[test]
    fn test_negative_credits_are_kept() {
        let course = Course::new("Audit", -2);
        assert_eq!(course.to_string(), "Audit : -2 cr");
    }
}
