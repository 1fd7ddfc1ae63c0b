//! User records and the collection that owns them

/// Unique identifier of a user record
pub type UserId = u32;

/// A single user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Kept as entered; validated as a number no larger than 100
    pub age: String,
}

impl User {
    /// Field values of this record, without the identifier
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age.clone(),
        }
    }

    /// Whether the draft carries exactly the stored values.
    /// Comparison is case-sensitive and does not trim whitespace.
    pub fn matches(&self, draft: &UserDraft) -> bool {
        self.first_name == draft.first_name
            && self.last_name == draft.last_name
            && self.age == draft.age
    }
}

/// Field values captured from the form when an action is confirmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
}

impl UserDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: age.into(),
        }
    }
}

/// Ordered in-memory user collection
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection pre-filled with the demo records shown on first load
    pub fn seeded() -> Self {
        let seed = [
            (1, "Testy", "McTesty", "25"),
            (2, "Rupert", "Brown", "55"),
            (3, "Jacob", "Ironside", "15"),
        ];
        Self {
            users: seed
                .into_iter()
                .map(|(id, first, last, age)| User {
                    id,
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    age: age.to_string(),
                })
                .collect(),
        }
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

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Identifier the next inserted record receives: current maximum + 1, or 1 when empty
    pub fn next_id(&self) -> UserId {
        self.users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
    }

    /// Append a new record and return its identifier
    pub fn insert(&mut self, draft: UserDraft) -> UserId {
        let id = self.next_id();
        self.users.push(User {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            age: draft.age,
        });
        id
    }

    /// Replace the fields of an existing record in place.
    /// Returns false if no record has this identifier.
    pub fn update(&mut self, id: UserId, draft: UserDraft) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.first_name = draft.first_name;
                user.last_name = draft.last_name;
                user.age = draft.age;
                true
            }
            None => false,
        }
    }

    /// Remove the record with this identifier, returning it if present
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }
}
