pub type UserId = i32;
pub type Username = String;
pub type Password = String;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password: Password,
}

impl User {
    pub fn new(id: UserId, username: impl Into<Username>, password: impl Into<Password>) -> User {
        User {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn has_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
