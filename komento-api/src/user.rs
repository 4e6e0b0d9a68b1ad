/// Avatar image references, one per format the dataset ships.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Avatar {
    pub png: String,
    pub webp: String,
}

/// A user as attached to comments and replies. Copied by value from the
/// session's current user at creation time and immutable afterwards.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub image: Avatar,
    pub username: String,
}
