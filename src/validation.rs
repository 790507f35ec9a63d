//! Admission checks for candidate books.
//!
//! Every rule runs on every call; the result lists all failing fields at once so a
//! form can show each message next to its field.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::book::NewBook;

/// Minimum description length, in characters after trimming.
pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Author,
    Category,
    Description,
    Rating,
    CoverImage,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Author,
        Field::Category,
        Field::Description,
        Field::Rating,
        Field::CoverImage,
    ];

    /// Form field name, as used in the serialized book.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Category => "category",
            Field::Description => "description",
            Field::Rating => "rating",
            Field::CoverImage => "coverImage",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Category => "Category",
            Field::Description => "Description",
            Field::Rating => "Rating",
            Field::CoverImage => "Cover image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown form field {0:?}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: Field },
    #[error("{field} must be at least {min} characters long")]
    TooShort { field: Field, min: usize },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: Field, min: u8, max: u8 },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required { field }
            | FieldError::TooShort { field, .. }
            | FieldError::OutOfRange { field, .. } => *field,
        }
    }
}

/// Failing fields and why. Empty means the candidate is admissible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message to show next to `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    /// Field name to message, in field order.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.name(), error.to_string()))
            .collect()
    }

    pub(crate) fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    /// Forget the error on `field`. Returns it if there was one.
    pub fn clear(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }
}

fn require(errors: &mut ValidationErrors, field: Field, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(FieldError::Required { field });
        false
    } else {
        true
    }
}

/// Check `candidate` against every rule and report all failures together.
pub fn validate(candidate: &NewBook) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    require(&mut errors, Field::Title, &candidate.title);
    require(&mut errors, Field::Author, &candidate.author);
    // A category is picked, not typed, so only an unselected one is missing.
    if candidate.category.is_empty() {
        errors.insert(FieldError::Required {
            field: Field::Category,
        });
    }

    if require(&mut errors, Field::Description, &candidate.description)
        && candidate.description.trim().chars().count() < MIN_DESCRIPTION_LEN
    {
        errors.insert(FieldError::TooShort {
            field: Field::Description,
            min: MIN_DESCRIPTION_LEN,
        });
    }

    // NaN is not within range either.
    if !(MIN_RATING..=MAX_RATING).contains(&candidate.rating) {
        errors.insert(FieldError::OutOfRange {
            field: Field::Rating,
            min: MIN_RATING as u8,
            max: MAX_RATING as u8,
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidate(title: &str, description: &str, rating: f64) -> NewBook {
        NewBook {
            title: title.into(),
            author: "A".into(),
            category: "Fiction".into(),
            description: description.into(),
            rating,
            cover_image: String::new(),
        }
    }

    #[test]
    fn valid_candidate_has_no_errors() {
        let errors = validate(&candidate("T", "a fine long description", 5.0));
        assert!(errors.is_empty());
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = validate(&candidate("", "short", 0.0));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(Field::Title),
            Some(&FieldError::Required {
                field: Field::Title
            })
        );
        assert_eq!(
            errors.get(Field::Description),
            Some(&FieldError::TooShort {
                field: Field::Description,
                min: 10
            })
        );
    }

    #[test]
    fn rating_out_of_range_is_the_only_error() {
        let errors = validate(&candidate("T", "a fine long description", 6.0));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Rating]);
        assert_eq!(
            errors.message(Field::Rating).as_deref(),
            Some("Rating must be between 0 and 5")
        );

        assert!(!validate(&candidate("T", "a fine long description", -0.1)).is_empty());
        assert!(!validate(&candidate("T", "a fine long description", f64::NAN)).is_empty());
    }

    #[test]
    fn required_wins_over_too_short() {
        let errors = validate(&candidate("T", "    ", 1.0));
        assert_eq!(
            errors.message(Field::Description).as_deref(),
            Some("Description is required")
        );
    }

    #[test]
    fn description_length_is_measured_after_trim() {
        let errors = validate(&candidate("T", "   123456789   ", 1.0));
        assert_eq!(
            errors.message(Field::Description).as_deref(),
            Some("Description must be at least 10 characters long")
        );
        assert!(validate(&candidate("T", "  1234567890  ", 1.0)).is_empty());
    }

    #[test]
    fn blank_fields_are_required() {
        let errors = validate(&NewBook {
            title: " ".into(),
            author: "\t".into(),
            category: String::new(),
            description: String::new(),
            rating: 0.0,
            cover_image: String::new(),
        });

        let messages = errors.messages();
        assert_eq!(messages["title"], "Title is required");
        assert_eq!(messages["author"], "Author is required");
        assert_eq!(messages["category"], "Category is required");
        assert_eq!(messages["description"], "Description is required");
        assert!(!messages.contains_key("rating"));
    }

    #[test]
    fn whitespace_category_counts_as_selected() {
        let mut book = candidate("T", "a fine long description", 3.0);
        book.category = " ".into();
        assert!(validate(&book).get(Field::Category).is_none());
    }

    #[test]
    fn clear_removes_one_field() {
        let mut errors = validate(&candidate("", "short", 0.0));
        assert!(errors.clear(Field::Title).is_some());
        assert!(errors.clear(Field::Title).is_none());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("coverImage".parse::<Field>().unwrap(), Field::CoverImage);
        assert!("isbn".parse::<Field>().is_err());
    }
}
