use std::io::{Cursor, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::menu::Session;
use tictactoe::{Console, Menu, Status};

type TestConsole = Console<Cursor<&'static str>, Vec<u8>>;

fn run_menu(script: &'static str) -> (Menu<Cursor<&'static str>, Vec<u8>>, String) {
    let console: TestConsole = Console::new(Cursor::new(script), Vec::new());
    let mut menu = Menu::new(console.clone(), SmallRng::seed_from_u64(42));
    menu.run().unwrap();
    let output = console.with_output(|o| String::from_utf8(o.clone()).unwrap());
    (menu, output)
}

#[test]
fn test_start_hard_vs_hard() {
    let (menu, output) = run_menu("start hard hard\nexit\n");
    assert_eq!(menu.session().results(), &[Status::Draw]);
    assert!(!menu.session().is_running());
    assert!(output.starts_with("Input command: ---------\n"));
    assert!(output.contains("Making move level \"hard\"\n"));
    assert!(output.ends_with("Draw\nInput command: "));
}

#[test]
fn test_bad_commands_are_reported() {
    let (menu, output) = run_menu("\nfoo\nstart hard\nstart easy nobody\nexit now\nexit\n");
    assert!(menu.session().results().is_empty());
    assert!(output.contains("Empty line\n"));
    assert!(output.contains("Command 'foo' not found!\n"));
    assert_eq!(output.matches("Bad parameters!\n").count(), 3);
}

#[test]
fn test_menu_stops_at_end_of_input() {
    let (menu, output) = run_menu("start easy medium\nstart medium easy\n");
    assert_eq!(menu.session().results().len(), 2);
    assert!(output.ends_with("Input command: "));
}

#[test]
fn test_user_leaving_mid_game_ends_menu() {
    let (menu, output) = run_menu("start user easy\n2 2\n");
    assert!(menu.session().results().is_empty());
    assert!(output.contains("Enter the coordinates: "));
}

#[test]
fn test_garbled_command_line_is_reported() {
    let console = Console::new(Cursor::new(&b"\xff\nexit\n"[..]), Vec::new());
    let mut menu = Menu::new(console.clone(), SmallRng::seed_from_u64(0));
    menu.run().unwrap();
    assert!(!menu.session().is_running());
    let output = console.with_output(|o| String::from_utf8(o.clone()).unwrap());
    assert_eq!(output, "Input command: Command not found!\nInput command: ");
}

fn echo(
    session: &mut Session<Cursor<&'static str>, Vec<u8>>,
    args: &[&str],
) -> anyhow::Result<()> {
    writeln!(session.console, "echo {}", args[0])?;
    Ok(())
}

#[test]
fn test_registered_command() {
    let console: TestConsole = Console::new(Cursor::new("echo hi\necho\nexit\n"), Vec::new());
    let mut menu = Menu::new(console.clone(), SmallRng::seed_from_u64(0));
    menu.register("echo", 1, echo);
    menu.run().unwrap();
    let output = console.with_output(|o| String::from_utf8(o.clone()).unwrap());
    assert_eq!(
        output,
        "Input command: echo hi\nInput command: Bad parameters!\nInput command: "
    );
}
