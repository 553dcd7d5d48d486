//! Subscriber bookkeeping
//!
//! A `ClientSet` is an insertion-ordered set of client ids. It backs both the
//! broker-wide list of known clients and each topic's subscriber list, so "a client
//! appears at most once" holds by construction rather than by ad hoc checks.

pub type ClientId = String;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSet {
    members: Vec<ClientId>,
}

impl ClientSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append `id` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.members.push(id.to_string());
        true
    }

    /// Remove `id`, keeping the order of the remaining members. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.members.iter().position(|m| m == id) {
            Some(pos) => {
                self.members.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m == id)
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ClientId> {
        self.members.iter()
    }

    /// Members other than `id`, in insertion order.
    pub fn others<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a ClientId> + 'a {
        self.members.iter().filter(move |m| m.as_str() != id)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClientSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ClientSet::new();
        for id in iter {
            set.insert(id.as_ref());
        }
        set
    }
}

impl<'a> IntoIterator for &'a ClientSet {
    type Item = &'a ClientId;
    type IntoIter = std::slice::Iter<'a, ClientId>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
