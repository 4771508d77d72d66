//! Prints a bcrypt hash suitable for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `hash_password [password] [cost]`. Prompts on stdin when no
//! password is given.

use bcrypt::{DEFAULT_COST, hash};
use std::io::{self, Write};

fn read_password_from_stdin() -> io::Result<String> {
    print!("Admin password: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let password = match args.next() {
        Some(p) => p,
        None => read_password_from_stdin()?,
    };

    if password.chars().count() < 8 {
        return Err("admin password must be at least 8 characters".into());
    }

    let cost = match args.next() {
        Some(c) => c.parse()?,
        None => DEFAULT_COST,
    };

    println!("{}", hash(password, cost)?);
    Ok(())
}
