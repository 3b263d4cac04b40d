use serde::Deserialize;
use serde_json::Value;

// response
//  ├── status          "ok" | "warning" | "error"
//  ├── errors[]
//  │    ├── reason
//  │    ├── message
//  │    └── detailed_message
//  └── table
//       └── rows[]
//            └── c[]        (null for an empty cell)
//                 ├── v     raw value
//                 └── f     formatted text

#[derive(Debug, Deserialize)]
pub struct GvizResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub errors: Vec<GvizMessage>,
    pub table: Option<Table>,
}

#[derive(Debug, Deserialize)]
pub struct GvizMessage {
    pub reason: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "detailed_message")]
    pub detailed_message: Option<String>,
}

impl GvizMessage {
    pub fn describe(&self) -> String {
        self.detailed_message
            .as_deref()
            .or(self.message.as_deref())
            .or(self.reason.as_deref())
            .unwrap_or("unknown error")
            .to_string()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub c: Vec<Option<Cell>>,
}

impl Row {
    #[cfg(test)]
    pub fn new(cells: Vec<Option<Cell>>) -> Self {
        Self { c: cells }
    }

    /// The cell at `index`, treating short rows and null cells alike.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.c.get(index).and_then(Option::as_ref)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cell {
    pub v: Option<Value>,
    pub f: Option<String>,
}

impl Cell {
    #[cfg(test)]
    pub fn raw(value: impl Into<Value>) -> Self {
        Self {
            v: Some(value.into()),
            f: None,
        }
    }

    #[cfg(test)]
    pub fn formatted(raw: impl Into<Value>, text: &str) -> Self {
        Self {
            v: Some(raw.into()),
            f: Some(text.to_string()),
        }
    }

    /// The formatted text, falling back to the raw value's text.
    pub fn display_text(&self) -> Option<String> {
        self.f.clone().or_else(|| self.raw_text())
    }

    /// The raw value as text, falling back to the formatted text.
    pub fn value_text(&self) -> Option<String> {
        self.raw_text().or_else(|| self.f.clone())
    }

    fn raw_text(&self) -> Option<String> {
        match self.v.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
