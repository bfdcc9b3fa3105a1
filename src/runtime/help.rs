use std::fmt::Write;

use crate::{
    config::{CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH},
    parser::ValueSwitch,
};

const VALUE_SWITCHES: [(ValueSwitch, &str, &str); 4] = [
    (ValueSwitch::ApplicationFilePath, "<file>", "Application to start (required)"),
    (ValueSwitch::ApplicationArguments, "<args>", "Arguments passed to the application"),
    (ValueSwitch::WorkingFolderPath, "<folder>", "Working folder for the application"),
    (ValueSwitch::RegFilePath, "<file>", "Registry file imported before the launch (required)"),
];

/// Usage text printed for `-h`, `/h`, `-?` and `/?`.
pub fn help_text() -> String {
    let mut text = String::from(
        "Imports a registry file silently, then starts an application.\n\n\
         Usage:\n  \
         run-as-registry [OPTIONS] -i <file> [-a <args>] [-w <folder>] [-o] -r <file>\n  \
         run-as-registry [OPTIONS]            (use the [profile] from the configuration file)\n  \
         run-as-registry -h | -T\n\n\
         Switches (each may also be written with '/'):\n",
    );

    for (switch, value, description) in VALUE_SWITCHES {
        let (hyphen, slash) = switch.spellings();
        let spelling = format!("{hyphen}, {slash} {value}");
        let _ = writeln!(text, "  {spelling:<22}{description}");
    }
    let _ = writeln!(
        text,
        "  {:<22}Do nothing if the application is already running",
        "-o, /o"
    );
    let _ = writeln!(text, "  {:<22}Show this help", "-h, /h, -?, /?");
    let _ = writeln!(text, "  {:<22}Run the built-in parser self-test", "-T, /T");

    let _ = write!(
        text,
        "\nValues containing spaces must be quoted; inside quotes write \\\" or \"\" for a literal quote.\n\
         -h and -T cannot be combined with any other switch.\n\n\
         Options (before the first switch):\n  \
         {:<22}Configuration file (default: {CONFIG_ENV_KEY} or ./{DEFAULT_CONFIG_PATH})\n  \
         {:<22}Tokenize this string instead of the switches\n  \
         {:<22}Print the canonical command line and exit\n  \
         {:<22}Save the switches as a [profile] TOML file and exit\n",
        "--config <PATH>", "--command-line <STR>", "--print", "--save-profile <PATH>"
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_switch_in_both_spellings() {
        let text = help_text();
        for needle in [
            "-i, /i", "-a, /a", "-w, /w", "-r, /r", "-o, /o", "-h, /h, -?, /?", "-T, /T",
        ] {
            assert!(text.contains(needle), "help text lacks {needle}:\n{text}");
        }
        assert!(text.contains("--save-profile"));
    }
}
