// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session;
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let username = sub
        .get_one::<String>("username")
        .context("username is required")?;
    let password = sub
        .get_one::<String>("password")
        .context("--password is required")?;
    let user = session::login(conn, username, password)?;
    println!("Welcome, {}", user);
    Ok(())
}

pub fn logout(conn: &Connection) -> Result<()> {
    match session::logout(conn)? {
        Some(u) => println!("Logged out {}", u),
        None => println!("Not logged in"),
    }
    Ok(())
}

pub fn whoami(conn: &Connection) -> Result<()> {
    match session::current_user(conn)? {
        Some(u) => println!("{}", u),
        None => println!("Not logged in"),
    }
    Ok(())
}
