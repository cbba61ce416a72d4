// Fixed list of selectable names. Entries are addressed by index, so the two
// "Giovanni" slots stay distinct.

pub const STUDENTS: [&str; 30] = [
    "Mario", "Luigi", "Anna", "Giulia", "Marco", "Sofia", "Matteo", "Luca", "Sara", "Francesco",
    "Alessandro", "Chiara", "Giovanni", "Elena", "Martina", "Davide", "Giorgia", "Nicola", "Federica", "Simone",
    "Carla", "Giovanni", "Valentina", "Emanuele", "Vittoria", "Stefano", "Rosa", "Pietro", "Simona", "Cristina",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(STUDENTS)
    }
}
