use thiserror::Error;

use super::Notification;
use crate::{ANONYMOUS, NewPost, Post};

const MISSING_FIELDS: &str = "Title and content are required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
    Author,
}

/// Raised before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title and content are required")]
    MissingFields,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

impl FormError {
    /// The message to show, if any. A duplicate submit is silently ignored.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::MissingFields => Some(Notification::validation(MISSING_FIELDS)),
            Self::AlreadySubmitting => None,
        }
    }
}

/// Blank (or whitespace-only) authors become [`ANONYMOUS`]; anything else is
/// trimmed.
pub fn resolve_author(raw: &str) -> String {
    let author = raw.trim();
    if author.is_empty() {
        ANONYMOUS.to_string()
    } else {
        author.to_string()
    }
}

/// Draft fields of the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub author: String,
    submitting: bool,
}

impl PostForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
            Field::Author => &self.author,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Content => self.content = value,
            Field::Author => self.author = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replaces every draft field with the post's values.
    pub fn seed(&mut self, post: &Post) {
        self.title = post.title.clone();
        self.content = post.content.clone();
        self.author = post.author.clone();
    }

    pub fn validate(&self) -> Result<NewPost, FormError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(FormError::MissingFields);
        }

        Ok(NewPost {
            title: self.title.clone(),
            content: self.content.clone(),
            author: resolve_author(&self.author),
        })
    }

    pub(crate) fn begin(&mut self) -> Result<NewPost, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        let post = self.validate()?;
        self.submitting = true;
        Ok(post)
    }

    pub(crate) fn finish(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(title: &str, content: &str, author: &str) -> PostForm {
        let mut form = PostForm::default();
        form.set(Field::Title, title);
        form.set(Field::Content, content);
        form.set(Field::Author, author);
        form
    }

    #[test]
    fn blank_author_becomes_anonymous() {
        for author in ["", "   ", "\t\n"] {
            let post = filled("T", "C", author).validate().unwrap();
            assert_eq!(post.author, "Anonymous");
        }
    }

    #[test]
    fn author_is_trimmed() {
        let post = filled("T", "C", "  Ada Lovelace ").validate().unwrap();
        assert_eq!(post.author, "Ada Lovelace");
    }

    #[test]
    fn title_and_content_are_required() {
        assert_eq!(filled("", "C", "A").validate(), Err(FormError::MissingFields));
        assert_eq!(filled("T", "  \n", "A").validate(), Err(FormError::MissingFields));
        assert_eq!(filled(" ", "", "").validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn second_begin_is_refused_until_finish() {
        let mut form = filled("T", "C", "");
        assert!(form.begin().is_ok());
        assert_eq!(form.begin(), Err(FormError::AlreadySubmitting));
        assert_eq!(FormError::AlreadySubmitting.notification(), None);

        form.finish();
        assert!(form.begin().is_ok());
    }

    #[test]
    fn invalid_begin_does_not_enter_submitting() {
        let mut form = filled("", "", "");
        assert_eq!(form.begin(), Err(FormError::MissingFields));
        assert!(!form.is_submitting());
    }
}
