// SPDX-FileCopyrightText: 2025 Felix Gruber
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::thread;
use std::time::Duration;

use clap::{Arg, ArgMatches, Command};

use super::LEDGrid;
use super::animation::{self, AVAILABLE_DEMOS, EXAMPLE};
use super::color::{self, Color};
use super::error::Error;
use super::rotation::Rotation;
use super::window::GridWindow;

pub fn demo_subcommand() -> Command {
    Command::new("demo")
    .about("Run one of the bundled demo animations")
    .arg(
        Arg::new("demo")
            .help("the demo to run")
            .index(1)
            .required(true)
            .value_parser(AVAILABLE_DEMOS),
    )
    .arg(
        Arg::new("seconds")
            .help("stop after this many seconds instead of running until escape is pressed")
            .num_args(1)
            .long("seconds")
            .value_parser(clap::value_parser!(f64))
    )
    .arg(rotation_arg())
    .arg(title_arg())
}

pub fn letter_subcommand() -> Command {
    Command::new("letter")
    .about("Display a single character on the grid")
    .arg(
        Arg::new("character")
            .help("the character to display")
            .index(1)
            .required(true)
            .value_parser(parse_character),
    )
    .arg(seconds_arg())
    .arg(text_color_arg())
    .arg(back_color_arg())
    .arg(rotation_arg())
    .arg(title_arg())
}

pub fn message_subcommand() -> Command {
    Command::new("message")
    .about("Scroll a message across the grid")
    .arg(
        Arg::new("text")
            .help("the text to scroll")
            .index(1)
            .required(true),
    )
    .arg(
        Arg::new("scroll-speed")
            .help("seconds to pause between scroll steps")
            .num_args(1)
            .long("scroll-speed")
            .default_value("0.1")
            .value_parser(clap::value_parser!(f64))
    )
    .arg(text_color_arg())
    .arg(back_color_arg())
    .arg(rotation_arg())
    .arg(title_arg())
}

pub fn image_subcommand() -> Command {
    Command::new("image")
    .about("Display an 8x8 image file on the grid")
    .arg(
        Arg::new("image-file")
            .help("an 8x8 image file to load onto the grid")
            .index(1)
            .required(true),
    )
    .arg(seconds_arg())
    .arg(rotation_arg())
    .arg(title_arg())
}

pub fn tour_subcommand() -> Command {
    Command::new("tour")
    .about("Show a short walkthrough of the grid's capabilities")
    .arg(rotation_arg())
    .arg(title_arg())
}

fn rotation_arg() -> Arg {
    Arg::new("rotation")
        .help("viewing rotation in degrees")
        .num_args(1)
        .long("rotation")
        .default_value("0")
        .value_parser(parse_rotation)
}

fn title_arg() -> Arg {
    Arg::new("title")
        .help("window title")
        .num_args(1)
        .long("title")
        .default_value("LED Grid")
}

fn seconds_arg() -> Arg {
    Arg::new("seconds")
        .help("keep the window open for this many seconds")
        .num_args(1)
        .long("seconds")
        .default_value("5")
        .value_parser(clap::value_parser!(f64))
}

fn text_color_arg() -> Arg {
    Arg::new("fg")
        .help("text color, given as r,g,b")
        .num_args(1)
        .long("fg")
        .default_value("255,255,255")
        .value_parser(parse_color)
}

fn back_color_arg() -> Arg {
    Arg::new("bg")
        .help("background color, given as r,g,b")
        .num_args(1)
        .long("bg")
        .default_value("0,0,0")
        .value_parser(parse_color)
}

fn parse_color(s: &str) -> Result<Color, Error> {
    s.parse()
}

fn parse_rotation(s: &str) -> Result<Rotation, Error> {
    let degrees = s.parse().map_err(|_| Error::Validation(
        "Rotation must be 0, 90, 180 or 270 degrees".to_string()))?;
    Rotation::from_degrees(degrees)
}

fn parse_character(s: &str) -> Result<char, Error> {
    let mut characters = s.chars();
    match (characters.next(), characters.next()) {
        (Some(character), None) => Ok(character),
        _ => Err(Error::Validation(
            "Only one character may be displayed at a time".to_string())),
    }
}

fn grid_from_args(subcommand: &ArgMatches) -> LEDGrid<GridWindow> {
    let title: &String = subcommand.get_one("title").unwrap();
    let rotation = *subcommand.get_one::<Rotation>("rotation").unwrap();
    let mut grid = LEDGrid::new(title);
    grid.set_rotation(rotation, true);
    grid
}

pub fn run_demo_from_subcommand(subcommand: &ArgMatches) {
    let demo: &String = subcommand.get_one("demo").unwrap();
    let mut grid = grid_from_args(subcommand);
    let mut demo = animation::demo_by_name(demo);
    match subcommand.get_one::<f64>("seconds") {
        Some(&seconds) => {
            animation::run_for(demo.as_mut(), &mut grid,
                               Duration::from_secs_f64(seconds)).unwrap();
        }
        None => {
            animation::run_until_escape(demo.as_mut(), &mut grid).unwrap();
        }
    }
}

pub fn run_letter_from_subcommand(subcommand: &ArgMatches) {
    let character = *subcommand.get_one::<char>("character").unwrap();
    let text_color = *subcommand.get_one::<Color>("fg").unwrap();
    let back_color = *subcommand.get_one::<Color>("bg").unwrap();
    let seconds = *subcommand.get_one::<f64>("seconds").unwrap();
    let mut grid = grid_from_args(subcommand);
    grid.show_letter(character, text_color, back_color).unwrap();
    thread::sleep(Duration::from_secs_f64(seconds));
}

pub fn run_message_from_subcommand(subcommand: &ArgMatches) {
    let text: &String = subcommand.get_one("text").unwrap();
    let text_color = *subcommand.get_one::<Color>("fg").unwrap();
    let back_color = *subcommand.get_one::<Color>("bg").unwrap();
    let scroll_speed = *subcommand.get_one::<f64>("scroll-speed").unwrap();
    let mut grid = grid_from_args(subcommand);
    grid.show_message(text, Duration::from_secs_f64(scroll_speed),
                      text_color, back_color).unwrap();
}

pub fn run_image_from_subcommand(subcommand: &ArgMatches) {
    let filename: &String = subcommand.get_one("image-file").unwrap();
    let seconds = *subcommand.get_one::<f64>("seconds").unwrap();
    println!("loading {}", filename);
    let mut grid = grid_from_args(subcommand);
    grid.load_image(Path::new(filename), true).unwrap();
    thread::sleep(Duration::from_secs_f64(seconds));
}

pub fn run_tour_from_subcommand(subcommand: &ArgMatches) {
    let mut grid = grid_from_args(subcommand);
    grid.set_pixels(&EXAMPLE).unwrap();
    thread::sleep(Duration::from_secs(2));
    show_message_if_available(&mut grid, "Welcome to some examples",
                              Duration::from_millis(50), color::PURPLE);
    for demo in ["cycle", "rainbow", "question-mark"] {
        let mut demo = animation::demo_by_name(demo);
        animation::run_for(demo.as_mut(), &mut grid,
                           Duration::from_secs(5)).unwrap();
        if grid.is_esc_pressed() {
            return;
        }
    }
    show_message_if_available(&mut grid, "Thanks for watching!",
                              Duration::from_millis(70), color::RED);
}

fn show_message_if_available(grid: &mut LEDGrid<GridWindow>, text: &str,
                             scroll_speed: Duration, text_color: Color) {
    match grid.show_message(text, scroll_speed, text_color, color::OFF) {
        Err(Error::CapabilityUnavailable(_)) => {}
        result => result.unwrap(),
    }
}
