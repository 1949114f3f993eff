use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
     _            _        _               _
    | | ___  __ _| | _____| |__   ___  ___| | __
    | |/ _ \/ _` | |/ / __| '_ \ / _ \/ __| |/ /
    | |  __/ (_| |   < (__| | | |  __/ (__|   <
    |_|\___|\__,_|_|\_\___|_| |_|\___|\___|_|\_\
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
