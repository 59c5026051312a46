// SPDX-FileCopyrightText: 2025 Felix Gruber
//
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::{crate_name, crate_version, Command};

use ledgrid_rs::led_grid::commandline;

fn main() {
    let matches = Command::new(crate_name!())
        .about("An 8x8 RGB LED matrix simulated in a window.")
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(commandline::demo_subcommand())
        .subcommand(commandline::letter_subcommand())
        .subcommand(commandline::message_subcommand())
        .subcommand(commandline::image_subcommand())
        .subcommand(commandline::tour_subcommand())
        .get_matches();
    match matches.subcommand() {
        Some(("demo", matches)) => {
            commandline::run_demo_from_subcommand(matches);
        }
        Some(("letter", matches)) => {
            commandline::run_letter_from_subcommand(matches);
        }
        Some(("message", matches)) => {
            commandline::run_message_from_subcommand(matches);
        }
        Some(("image", matches)) => {
            commandline::run_image_from_subcommand(matches);
        }
        Some(("tour", matches)) => {
            commandline::run_tour_from_subcommand(matches);
        }
        Some((s, _)) => {
            eprintln!("Unknown command: {}", s);
        }
        None => {
            eprintln!("Missing command.");
        }
    }
}
