use run_as_registry::{
    lib::errors::ValidationError,
    parser::{join_arguments, render_command_line, tokenize, ArgumentParser, ValueSwitch},
};

#[test]
fn quoted_tokens_survive_a_join_and_tokenize_cycle() {
    let tokens = [
        "-i",
        r"C:\Program Files\App\app.exe",
        "-a",
        r#"--title "Main Window" --x"#,
        "-w",
        r"C:\Program Files\App",
        "-r",
        r"C:\App\app.reg",
    ];

    let joined = join_arguments(&tokens).expect("all tokens are representable");
    assert_eq!(tokenize(&joined), tokens);
}

#[test]
fn canonical_command_line_parses_back_to_the_same_config() {
    let mut parser = ArgumentParser::new();
    let original = parser
        .parse_command_line(r#"-o -r "C:\App\app.reg" -a "/silent /norestart" -i "C:\App\app.exe""#)
        .expect("valid command line")
        .clone();

    let rendered = render_command_line(&original).expect("renderable");
    assert_eq!(
        rendered,
        r#"/i C:\App\app.exe /a "/silent /norestart" /o /r C:\App\app.reg"#
    );

    let reparsed = parser.parse_command_line(&rendered).expect("rendered form is valid");
    assert_eq!(*reparsed, original);
}

#[test]
fn one_parser_handles_a_mixed_sequence_of_inputs() {
    let mut parser = ArgumentParser::new();

    let error = parser
        .parse_arguments(["-i", "app.exe", "-i", "app2.exe", "-r", "x.reg"])
        .expect_err("duplicate application path");
    assert_eq!(
        error,
        ValidationError::DuplicateSwitch {
            switch: ValueSwitch::ApplicationFilePath
        }
    );
    assert!(!parser.has_arguments());

    let config = parser
        .parse_command_line("/i app.exe /r x.reg")
        .expect("valid after a failure");
    assert_eq!(config.application_file_path.as_deref(), Some("app.exe"));
    assert!(!config.one_instance);

    parser.parse_command_line("-T -o").expect_err("self-test is exclusive");
    assert_eq!(parser.config().application_file_path, None);
}
