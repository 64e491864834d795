mod shell;
mod sidebar;

pub use shell::Shell;

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Customers,
}
