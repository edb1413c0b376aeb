//! The school directory — a static id → display-name lookup, loaded once.

use std::collections::{HashMap, hash_map::Entry};

use serde::Deserialize;

use crate::Result;

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct School {
  #[serde(rename = "Id")]
  pub id:   String,
  #[serde(rename = "Name", default)]
  pub name: Option<String>,
}

impl School {
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Self { id: id.into(), name: Some(name.into()) }
  }
}

#[derive(Debug, Deserialize)]
struct RawSchools {
  #[serde(rename = "Schools", default)]
  schools: Vec<School>,
}

/// Immutable lookup of every known school, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct SchoolDirectory {
  schools: HashMap<String, School>,
}

impl SchoolDirectory {
  /// Decode the directory from the schools file's JSON text.
  pub fn from_json(input: &str) -> Result<Self> {
    let raw: RawSchools = serde_json::from_str(input)?;
    Ok(raw.schools.into_iter().collect())
  }

  pub fn get(&self, id: &str) -> Option<&School> { self.schools.get(id) }

  /// Display name for `id`, if the school is known and named.
  pub fn name_of(&self, id: &str) -> Option<&str> {
    self.get(id).and_then(|s| s.name.as_deref())
  }

  pub fn len(&self) -> usize { self.schools.len() }

  pub fn is_empty(&self) -> bool { self.schools.is_empty() }
}

impl FromIterator<School> for SchoolDirectory {
  /// The first entry for an id wins; later duplicates are logged and ignored.
  fn from_iter<I: IntoIterator<Item = School>>(iter: I) -> Self {
    let mut schools = HashMap::new();
    for school in iter {
      match schools.entry(school.id.clone()) {
        Entry::Occupied(_) => {
          tracing::warn!(id = %school.id, "duplicate school id in directory");
        }
        Entry::Vacant(slot) => {
          slot.insert(school);
        }
      }
    }
    Self { schools }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  #[test]
  fn decodes_schools_file() {
    let dir = SchoolDirectory::from_json(
      r#"{ "Schools": [
        { "Id": "A", "Name": "Acme" },
        { "Id": "B", "Name": "Bayou Academy" }
      ] }"#,
    )
    .unwrap();
    assert_eq!(dir.len(), 2);
    assert_eq!(dir.name_of("A"), Some("Acme"));
    assert_eq!(dir.name_of("B"), Some("Bayou Academy"));
    assert!(dir.get("Z").is_none());
  }

  #[test]
  fn missing_name_is_allowed() {
    let dir = SchoolDirectory::from_json(r#"{ "Schools": [ { "Id": "N" } ] }"#)
      .unwrap();
    assert_eq!(dir.get("N").map(|s| s.id.as_str()), Some("N"));
    assert_eq!(dir.name_of("N"), None);
  }

  #[test]
  fn missing_id_is_a_decode_error() {
    let err = SchoolDirectory::from_json(r#"{ "Schools": [ { "Name": "X" } ] }"#)
      .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
  }

  #[test]
  fn first_duplicate_wins() {
    let dir: SchoolDirectory =
      [School::new("A", "First"), School::new("A", "Second")]
        .into_iter()
        .collect();
    assert_eq!(dir.len(), 1);
    assert_eq!(dir.name_of("A"), Some("First"));
  }
}
