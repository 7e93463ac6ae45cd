//! Reads a password from stdin and prints its bcrypt hash for `FLEET_USERS`.

use std::io::BufRead;

use fleet_scheduler::server::{error::Error, service::auth::hash_password};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut password = String::new();
    std::io::stdin().lock().read_line(&mut password)?;

    let password = password.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        eprintln!("Usage: echo <password> | fleet-hash-password");
        std::process::exit(2);
    }

    println!("{}", hash_password(password)?);

    Ok(())
}
