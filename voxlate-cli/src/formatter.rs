#[derive(Clone)]
pub struct Formatter {
    use_colors: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn print_system(&self, msg: &str) {
        if self.use_colors {
            println!("\x1b[33m[System]\x1b[0m {msg}");
        } else {
            println!("[System] {msg}");
        }
    }

    pub fn print_translation(&self, language: &str, text: &str) {
        if self.use_colors {
            println!("\x1b[32m[{language}]\x1b[0m {text}");
        } else {
            println!("[{language}] {text}");
        }
    }

    pub fn print_error(&self, msg: &str) {
        if self.use_colors {
            eprintln!("\x1b[31m[Error]\x1b[0m {msg}");
        } else {
            eprintln!("[Error] {msg}");
        }
    }

    pub fn prompt(&self, language: &str) -> String {
        if self.use_colors {
            format!("\x1b[35m{language}>\x1b[0m ")
        } else {
            format!("{language}> ")
        }
    }
}
