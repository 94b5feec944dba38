//! Menu option entity.

/// A selectable entry in a menu, rendered differently per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOption {
    /// Plain text entry
    Label(String),
    /// Profile summary of another user
    UserCard(UserCard),
    /// Pending connection request from another user
    RequestCard(RequestCard),
    /// Entry that starts an action rather than naming an item
    ActionMarker(String),
}

impl MenuOption {
    /// Create a plain text option
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    /// Create an action option
    pub fn action(text: impl Into<String>) -> Self {
        Self::ActionMarker(text.into())
    }

    /// Build plain text options from a list of labels
    pub fn labels<I, S>(labels: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels.into_iter().map(Self::label).collect()
    }
}

impl From<&str> for MenuOption {
    fn from(text: &str) -> Self {
        Self::label(text)
    }
}

impl From<UserCard> for MenuOption {
    fn from(card: UserCard) -> Self {
        Self::UserCard(card)
    }
}

impl From<RequestCard> for MenuOption {
    fn from(card: RequestCard) -> Self {
        Self::RequestCard(card)
    }
}

/// Profile fields shown on a user card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserCard {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields shown on a connection request card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCard {
    pub from_user: String,
    pub from_name: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_builder() {
        let options = MenuOption::labels(["Log In", "Sign Up"]);
        assert_eq!(
            options,
            vec![MenuOption::label("Log In"), MenuOption::label("Sign Up")]
        );
    }

    #[test]
    fn test_user_card_full_name() {
        let card = UserCard {
            user_id: "ada".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "al1@nyu.edu".into(),
        };
        assert_eq!(card.full_name(), "Ada Lovelace");
    }
}
