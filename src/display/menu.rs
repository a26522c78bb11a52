//! Command menu

use crate::cli::command::CommandName;

const MENU_WIDTH: usize = 68;

/// Format the table of available commands
pub fn format_menu() -> String {
    let divider = "-".repeat(MENU_WIDTH);
    let mut lines = vec![
        divider.clone(),
        format!("|{:^66}|", "Travel Information System"),
        divider.clone(),
        menu_line("Command", "Arguments", "Description"),
        divider.clone(),
    ];

    lines.extend(
        CommandName::ALL
            .iter()
            .map(|name| menu_line(name.as_str(), name.arguments(), name.description())),
    );

    lines.push(divider);
    lines.join("\n")
}

fn menu_line(command: &str, arguments: &str, description: &str) -> String {
    format!("| {:<7}| {:<31}| {:<23}|", command, arguments, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_command() {
        let menu = format_menu();
        for name in CommandName::ALL {
            assert!(
                menu.lines().any(|line| line.starts_with(&format!("| {:<7}|", name))),
                "missing {}",
                name
            );
        }
    }

    #[test]
    fn test_menu_lines_have_equal_width() {
        let menu = format_menu();
        assert!(menu.lines().all(|line| line.chars().count() == MENU_WIDTH));
        assert!(menu.contains("| add    | id;city;date;days;price;vehicle| Add new travel         |"));
    }
}
