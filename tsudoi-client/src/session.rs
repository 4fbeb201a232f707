use crate::api::{Error, Roster, User};

/// The logged-in user, for the remainder of the process.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    pub user: User,
}

/// Looks `username` up in the roster and checks the password with a plain
/// string comparison. The roster is a demo fixture; there is nothing to
/// hash. A failed attempt returns `InvalidCredentials` and the caller keeps
/// whatever session it already had.
pub fn login(roster: &Roster, username: &str, password: &str) -> Result<Session, Error> {
    match roster.by_name(username) {
        Some(user) if user.password == password => Ok(Session { user: user.clone() }),
        _ => Err(Error::InvalidCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserId;

    #[test]
    fn valid_credentials_open_a_session() {
        let roster = Roster::builtin();
        let session = login(&roster, "Aftab", "password1").unwrap();
        assert_eq!(session.user.id, UserId(1));
        assert_eq!(session.user.name, "Aftab");
    }

    #[test]
    fn wrong_password_or_user_fails() {
        let roster = Roster::builtin();
        assert_eq!(
            login(&roster, "Aftab", "wrong"),
            Err(Error::InvalidCredentials)
        );
        assert_eq!(
            login(&roster, "nobody", "password1"),
            Err(Error::InvalidCredentials)
        );
        // password of another roster user must not work either
        assert_eq!(
            login(&roster, "Aftab", "password2"),
            Err(Error::InvalidCredentials)
        );
    }
}
