//! Registry model: departments mapped to their course lists

use super::Course;
use crate::core::error::{RegistryError, Result};
use crate::debug;
use std::collections::HashMap;
use std::fmt::Write;

/// What `add_course` did to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The department already existed and the course was appended
    AddedToExisting,
    /// The department was created holding only the new course
    CreatedDepartment,
}

/// What `delete` removed from the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The whole department and its courses were removed
    DepartmentRemoved,
    /// The first course with the requested name was removed
    CourseRemoved(Course),
}

/// In-memory mapping of department keys to their courses
///
/// Course lists keep insertion order and may hold duplicates. A department
/// persists until it is deleted explicitly, even when its list becomes empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    departments: HashMap<String, Vec<Course>>,
}

/// Parse a credits field the way both the loader and `add_course` accept it
///
/// Surrounding whitespace is ignored; any integer in the `i64` range is accepted.
///
/// # Errors
/// Returns `RegistryError::InvalidCredits` if the text is not an integer
pub fn parse_credits(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| RegistryError::InvalidCredits {
            value: text.to_string(),
            line: None,
        })
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a course to a department, creating the department if needed
    pub fn insert(&mut self, department: &str, course: Course) -> AddOutcome {
        if let Some(courses) = self.departments.get_mut(department) {
            courses.push(course);
            AddOutcome::AddedToExisting
        } else {
            self.departments.insert(department.to_string(), vec![course]);
            AddOutcome::CreatedDepartment
        }
    }

    /// Add a course given as name words and credits text
    ///
    /// The course name is the words joined by single spaces. No duplicate check
    /// is made; adding the same course twice stores it twice.
    ///
    /// # Arguments
    /// * `department` - Department key
    /// * `name_words` - Words of the course name
    /// * `credits_text` - Credits as entered
    ///
    /// # Errors
    /// Returns `RegistryError::InvalidCredits` if `credits_text` is not an
    /// integer. The registry is left unchanged in that case.
    pub fn add_course<S: AsRef<str>>(
        &mut self,
        department: &str,
        name_words: &[S],
        credits_text: &str,
    ) -> Result<(Course, AddOutcome)> {
        let credits = parse_credits(credits_text)?;
        let course = Course::new(Course::name_from_words(name_words), credits);
        let outcome = self.insert(department, course.clone());
        debug!("add {department}/{}: {outcome:?}", course.name);
        Ok((course, outcome))
    }

    /// Delete a whole department, or the first course in it with a given name
    ///
    /// Course matching is by exact name only; credits are ignored, so with
    /// duplicates the earliest inserted course is removed. A department left
    /// empty is kept.
    ///
    /// # Errors
    /// - `RegistryError::DepartmentNotFound` if the department does not exist
    /// - `RegistryError::CourseNotFound` if no course has that name
    pub fn delete(&mut self, department: &str, course_name: Option<&str>) -> Result<DeleteOutcome> {
        let Some(courses) = self.departments.get_mut(department) else {
            return Err(RegistryError::DepartmentNotFound {
                department: department.to_string(),
            });
        };

        let Some(name) = course_name else {
            self.departments.remove(department);
            debug!("removed department {department}");
            return Ok(DeleteOutcome::DepartmentRemoved);
        };

        let position = courses.iter().position(|c| c.name == name).ok_or_else(|| {
            RegistryError::CourseNotFound {
                department: department.to_string(),
                course: name.to_string(),
            }
        })?;
        let removed = courses.remove(position);
        debug!("removed {department}/{} ({} cr)", removed.name, removed.credits);
        Ok(DeleteOutcome::CourseRemoved(removed))
    }

    /// Sum of the credits of every course in a department (0 when it has none)
    ///
    /// The sum is taken in `i128`, which holds the exact total of any number of
    /// `i64` credit values a registry can store.
    ///
    /// # Errors
    /// Returns `RegistryError::DepartmentNotFound` if the department does not exist
    pub fn department_credits(&self, department: &str) -> Result<i128> {
        self.courses(department)
            .map(|courses| courses.iter().map(|c| i128::from(c.credits)).sum())
            .ok_or_else(|| RegistryError::DepartmentNotFound {
                department: department.to_string(),
            })
    }

    /// Courses of a department in insertion order
    #[must_use]
    pub fn courses(&self, department: &str) -> Option<&[Course]> {
        self.departments.get(department).map(Vec::as_slice)
    }

    /// Courses of a department ordered by name, then credits
    #[must_use]
    pub fn sorted_courses(&self, department: &str) -> Option<Vec<&Course>> {
        self.departments.get(department).map(|courses| {
            let mut sorted: Vec<&Course> = courses.iter().collect();
            sorted.sort();
            sorted
        })
    }

    /// Department keys in ascending order
    #[must_use]
    pub fn departments(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.departments.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Whether a department exists
    #[must_use]
    pub fn contains(&self, department: &str) -> bool {
        self.departments.contains_key(department)
    }

    /// Number of departments
    #[must_use]
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    /// Whether the registry has no departments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Render one department: a `*KEY*` header then one `name : N cr` line per course
    ///
    /// # Errors
    /// Returns `RegistryError::DepartmentNotFound` if the department does not exist
    pub fn render_department(&self, department: &str) -> Result<String> {
        let courses =
            self.sorted_courses(department)
                .ok_or_else(|| RegistryError::DepartmentNotFound {
                    department: department.to_string(),
                })?;

        let mut out = String::new();
        let _ = writeln!(out, "*{department}*");
        for course in courses {
            let _ = writeln!(out, "{course}");
        }
        Ok(out)
    }

    /// Render every department in ascending key order
    #[must_use]
    pub fn render_all(&self) -> String {
        self.departments()
            .into_iter()
            .filter_map(|department| self.render_department(department).ok())
            .collect()
    }
}
