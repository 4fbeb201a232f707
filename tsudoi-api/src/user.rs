#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct UserId(pub u64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,

    /// Path or URL of the user's avatar image
    pub avatar: String,

    /// Plaintext on purpose: the roster is a compiled-in demo fixture,
    /// not an account database
    pub password: String,
}

/// The fixed, process-wide list of valid users.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    pub fn builtin() -> Roster {
        fn user(id: u64, name: &str, avatar: &str, password: &str) -> User {
            User {
                id: UserId(id),
                name: String::from(name),
                avatar: String::from(avatar),
                password: String::from(password),
            }
        }
        Roster {
            users: vec![
                user(1, "Aftab", "/post1.png", "password1"),
                user(2, "Aleza", "/post2.jpg", "password2"),
                user(3, "Chanda", "/post3.jpg", "password3"),
                user(4, "Don SRK", "/post4.jpg", "password4"),
                user(5, "Shiraz Faqeer", "/post5.png", "password5"),
            ],
        }
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
