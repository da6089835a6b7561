use voxlate_core::language::{self, Language};

pub enum LocalCommandResult {
    Handled {
        msg: String,
    },

    /// Play the most recent pronunciation
    Play,

    /// A command to exit the app was detected
    Exit,

    /// The input is text to translate (and should be sent to the actor).
    Unhandled,
}

const HELP: &str = "Type English text to translate it. Commands: \
/lang <name> selects the target language, /languages lists them, \
/play plays the last pronunciation, /quit exits";

pub fn handle_local_command(language: &mut Language, input: &str) -> LocalCommandResult {
    let input = input.trim();
    let (command, argument) = match input.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (input, ""),
    };

    match command {
        "/lang" => match language::lookup(argument) {
            Ok(entry) => {
                *language = entry.language;
                LocalCommandResult::Handled {
                    msg: format!("Target language: {}", entry.display_name),
                }
            }
            Err(_) => LocalCommandResult::Handled {
                msg: "Unsupported language.".to_string(),
            },
        },
        "/languages" => {
            let names: Vec<String> = Language::ordered()
                .map(|candidate| {
                    if candidate == *language {
                        format!("[{candidate}]")
                    } else {
                        candidate.to_string()
                    }
                })
                .collect();
            LocalCommandResult::Handled {
                msg: names.join(" "),
            }
        }
        "/play" => LocalCommandResult::Play,
        "/help" => LocalCommandResult::Handled {
            msg: HELP.to_string(),
        },
        "/exit" | "/quit" => LocalCommandResult::Exit,
        _ if command.starts_with('/') => LocalCommandResult::Handled {
            msg: format!("Unknown command: {command} (try /help)"),
        },
        _ => LocalCommandResult::Unhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handled(result: LocalCommandResult) -> String {
        match result {
            LocalCommandResult::Handled { msg } => msg,
            _ => panic!("expected a handled command"),
        }
    }

    #[test]
    fn lang_switches_target_case_insensitively() {
        let mut language = Language::French;

        let msg = handled(handle_local_command(&mut language, "/lang  tamil "));

        assert_eq!(language, Language::Tamil);
        assert_eq!(msg, "Target language: Tamil");
    }

    #[test]
    fn unknown_lang_keeps_current_target() {
        let mut language = Language::German;

        let msg = handled(handle_local_command(&mut language, "/lang Klingon"));

        assert_eq!(language, Language::German);
        assert_eq!(msg, "Unsupported language.");
    }

    #[test]
    fn languages_marks_current_target() {
        let mut language = Language::Spanish;

        let msg = handled(handle_local_command(&mut language, "/languages"));

        assert_eq!(msg, "French German [Spanish] Chinese Tamil");
    }

    #[test]
    fn plain_text_is_left_for_translation() {
        let mut language = Language::French;
        assert!(matches!(
            handle_local_command(&mut language, "Good morning"),
            LocalCommandResult::Unhandled
        ));
        assert!(matches!(
            handle_local_command(&mut language, "/play"),
            LocalCommandResult::Play
        ));
        assert!(matches!(
            handle_local_command(&mut language, "/quit"),
            LocalCommandResult::Exit
        ));
    }
}
