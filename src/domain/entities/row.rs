use std::cell::RefCell;
use std::rc::Rc;

/// Positional columns of a part record, in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Part,
    AltPart,
    Name,
    Brand,
    Model,
    Engine,
    Car,
    LocA,
    LocAStock,
    LocB,
    LocBStock,
    Unit,
    Rate,
    Value,
    Remarks,
}

impl Column {
    pub const COUNT: usize = 15;

    pub const ALL: [Column; Column::COUNT] = [
        Column::Part,
        Column::AltPart,
        Column::Name,
        Column::Brand,
        Column::Model,
        Column::Engine,
        Column::Car,
        Column::LocA,
        Column::LocAStock,
        Column::LocB,
        Column::LocBStock,
        Column::Unit,
        Column::Rate,
        Column::Value,
        Column::Remarks,
    ];

    /// Display headers in column order, as rendered by the table and the
    /// source files' first line.
    pub const HEADERS: [&'static str; Column::COUNT] = [
        "Part",
        "Alt_Part",
        "Name",
        "Brand",
        "Model",
        "Engine",
        "Car",
        "LocA",
        "LocA_Stock",
        "LocB",
        "LocB_Stock",
        "Unit",
        "Rate",
        "Value",
        "Remarks",
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn header(self) -> &'static str {
        Column::HEADERS[self.index()]
    }
}

/// One part record: up to 15 positional string fields. Lines with fewer
/// comma-separated segments produce short rows; absent fields read as "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in positional order, short rows included as-is.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn get(&self, column: Column) -> &str {
        self.fields.get(column.index()).map(String::as_str).unwrap_or("")
    }

    /// Writes a field, padding absent positions with empty strings so a
    /// short row can still receive a stock update.
    pub fn set(&mut self, column: Column, value: String) {
        let idx = column.index();
        if self.fields.len() <= idx {
            self.fields.resize(idx + 1, String::new());
        }
        self.fields[idx] = value;
    }

    /// Composite key fields: (Part, AltPart, Model).
    pub fn key(&self) -> (&str, &str, &str) {
        (
            self.get(Column::Part),
            self.get(Column::AltPart),
            self.get(Column::Model),
        )
    }

    /// Exact string equality on the composite key, case-sensitive.
    pub fn key_matches(&self, other: &Row) -> bool {
        self.key() == other.key()
    }
}

/// Shared ownership of a row. The filtered view holds clones of the same
/// cells as the full dataset, so in-place stock edits show through both.
pub type RowRef = Rc<RefCell<Row>>;

pub fn shared(row: Row) -> RowRef {
    Rc::new(RefCell::new(row))
}
