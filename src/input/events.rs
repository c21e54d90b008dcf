use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A UI event wired to a page-side action.
///
/// `action` names a handler the renderer looks up on its side; `params` is
/// handed to it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBinding {
    pub name: String,
    pub action: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

impl EventBinding {
    pub fn new(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: action.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: serde_json::Value) -> Self {
        self.params = Some(params);
        self
    }
}

/// Event bindings keyed by event name, kept in insertion order.
///
/// Serializes to `null` when empty and to an array of
/// `{name, action, params}` records otherwise; the renderer tells "no
/// events" apart from an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    bindings: Vec<EventBinding>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `action`. Re-binding a name replaces the previous
    /// binding and keeps its position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        action: impl Into<String>,
        params: Option<serde_json::Value>,
    ) {
        let binding = EventBinding {
            name: name.into(),
            action: action.into(),
            params,
        };

        match self.bindings.iter_mut().find(|b| b.name == binding.name) {
            Some(existing) => *existing = binding,
            None => self.bindings.push(binding),
        }
    }

    pub fn get(&self, name: &str) -> Option<&EventBinding> {
        self.bindings.iter().find(|b| b.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<EventBinding> {
        let index = self.bindings.iter().position(|b| b.name == name)?;
        Some(self.bindings.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The bindings, or `None` when there are none
    pub fn records(&self) -> Option<&[EventBinding]> {
        if self.bindings.is_empty() {
            None
        } else {
            Some(&self.bindings)
        }
    }
}

impl FromIterator<EventBinding> for Events {
    fn from_iter<I: IntoIterator<Item = EventBinding>>(iter: I) -> Self {
        let mut events = Events::new();
        for binding in iter {
            events.insert(binding.name, binding.action, binding.params);
        }
        events
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a EventBinding;
    type IntoIter = std::slice::Iter<'a, EventBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Events {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Events {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bindings = Option::<Vec<EventBinding>>::deserialize(deserializer)?;
        Ok(bindings.into_iter().flatten().collect())
    }
}
