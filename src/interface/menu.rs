/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Remove,
    Peek,
    Display,
    Search,
    Info,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Add,
        MenuAction::Remove,
        MenuAction::Peek,
        MenuAction::Display,
        MenuAction::Search,
        MenuAction::Info,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Add => "Add food item",
            MenuAction::Remove => "Remove food item",
            MenuAction::Peek => "Peek top/front item",
            MenuAction::Display => "Display all items",
            MenuAction::Search => "Search item by name",
            MenuAction::Info => "Show storage info (size / capacity / top name)",
            MenuAction::Exit => "Exit",
        }
    }
}
