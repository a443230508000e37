use recipe_core::{AppViewModel, Msg};

/// What a line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Send(Vec<Msg>),
    Help,
    Quit,
    Invalid(String),
    Nothing,
}

/// Parses one input line against the view it was typed at.
///
/// While a delete confirmation is open the line is read as its answer.
/// Recipe numbers are 1-based and only accepted if an indicator exists for
/// them, so the core never sees an out-of-range jump.
pub fn parse(line: &str, view: &AppViewModel) -> UiCommand {
    let line = line.trim();

    if view.pending_delete.is_some() {
        return match line.to_ascii_lowercase().as_str() {
            "y" | "yes" => UiCommand::Send(vec![Msg::DeleteConfirmed]),
            "" | "n" | "no" => UiCommand::Send(vec![Msg::DeleteCancelled]),
            _ => UiCommand::Invalid("please answer y or n".to_string()),
        };
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => UiCommand::Nothing,
        "n" | "next" => UiCommand::Send(vec![Msg::NextClicked]),
        "p" | "prev" | "previous" => UiCommand::Send(vec![Msg::PreviousClicked]),
        "url" => UiCommand::Send(vec![Msg::DraftChanged(rest.to_string())]),
        "submit" if rest.is_empty() => UiCommand::Send(vec![Msg::SubmitClicked]),
        "submit" => UiCommand::Send(vec![
            Msg::DraftChanged(rest.to_string()),
            Msg::SubmitClicked,
        ]),
        "d" | "delete" => UiCommand::Send(vec![Msg::DeleteClicked]),
        "r" | "reload" => UiCommand::Send(vec![Msg::ReloadClicked]),
        "clear" => UiCommand::Send(vec![Msg::DismissNotifications]),
        "h" | "help" | "?" => UiCommand::Help,
        "q" | "quit" | "exit" => UiCommand::Quit,
        other => match other.parse::<usize>() {
            Ok(number) if (1..=view.recipe_count).contains(&number) => {
                UiCommand::Send(vec![Msg::IndicatorClicked(number - 1)])
            }
            Ok(number) => UiCommand::Invalid(format!(
                "no recipe {number}; there are {}",
                view.recipe_count
            )),
            Err(_) => UiCommand::Invalid(format!("unknown command: {other} (try help)")),
        },
    }
}
