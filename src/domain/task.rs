use uuid::Uuid;

/// A checklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique ID for internal references
    pub id: Uuid,
    /// Trimmed display text, never blank
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// Insertion-ordered list of tasks
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Append a task. Blank or whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::new(text.to_string());
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Flip completion; returns the new state, or None if the id is unknown
    pub fn toggle(&mut self, id: Uuid) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Remove a task; returns it if it existed
    pub fn delete(&mut self, id: Uuid) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }
}
