use super::UserName;

pub struct NewUser {
    pub user_id: String,
    pub name: UserName,
    pub email: Option<String>,
}

impl From<UserName> for NewUser {
    fn from(name: UserName) -> Self {
        Self {
            user_id: name.user_id(),
            name,
            email: None,
        }
    }
}
