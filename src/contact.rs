//! Builds the `mailto:` link the contact form navigates to. Nothing is sent
//! anywhere by this site; the visitor's mail client takes over.

use urlencoding::encode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode(&self.subject()),
            encode(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    fn query(uri: &str, key: &str) -> String {
        Url::parse(uri)
            .unwrap()
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn mailto_targets_recipient() {
        let uri = jane().mailto_uri("owner@example.com");
        let url = Url::parse(&uri).unwrap();
        assert_eq!(url.scheme(), "mailto");
        assert_eq!(url.path(), "owner@example.com");
    }

    #[test]
    fn decoded_body_contains_exactly_the_fields() {
        let uri = jane().mailto_uri("owner@example.com");
        assert_eq!(
            query(&uri, "body"),
            "Name: Jane\nEmail: jane@x.com\n\nMessage:\nHi"
        );
        assert_eq!(query(&uri, "subject"), "Portfolio Contact from Jane");
    }

    #[test]
    fn reserved_characters_survive_encoding() {
        let form = ContactForm {
            name: "Tom & Jerry".to_string(),
            email: "t+j@x.com".to_string(),
            message: "50% off? a=b#c".to_string(),
        };
        let uri = form.mailto_uri("owner@example.com");
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
        assert_eq!(query(&uri, "body"), form.body());
        assert_eq!(query(&uri, "subject"), "Portfolio Contact from Tom & Jerry");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(jane().validate(), Ok(()));
        let mut form = jane();
        form.email = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("email")));
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField("name"))
        );
    }
}
