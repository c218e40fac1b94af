// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{command, Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

pub fn build_cli() -> Command {
    command!()
        .name("gofinances")
        .about("Track income and expenses per user, with monthly category summaries")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("login")
                .about("Sign in with an identity provider profile")
                .arg(
                    Arg::new("provider")
                        .long("provider")
                        .value_parser(["google", "apple"])
                        .default_value("google"),
                )
                .arg(
                    Arg::new("userinfo")
                        .long("userinfo")
                        .help("Google userinfo JSON response")
                        .conflicts_with_all(["id", "name", "email", "photo"]),
                )
                .arg(Arg::new("id").long("id").required_unless_present("userinfo"))
                .arg(Arg::new("name").long("name").required_unless_present("userinfo"))
                .arg(Arg::new("email").long("email").required_unless_present("userinfo"))
                .arg(Arg::new("photo").long("photo")),
        )
        .subcommand(
            Command::new("logout").about("Sign out").arg(
                Arg::new("purge")
                    .long("purge")
                    .action(ArgAction::SetTrue)
                    .help("Also delete the user's stored transactions"),
            ),
        )
        .subcommand(Command::new("whoami").about("Show the signed-in user"))
        .subcommand(
            Command::new("category")
                .about("Category catalog")
                .subcommand(Command::new("list").arg(json_flag())),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("entry|expense"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD (local) or RFC 3339; defaults to now"),
                        ),
                )
                .subcommand(Command::new("list").arg(json_flag())),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Totals, balance and the transaction list")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("summary")
                .about("Expenses by category for one month")
                .arg(Arg::new("month").long("month").help("YYYY-MM; defaults to this month"))
                .arg(
                    Arg::new("prev")
                        .long("prev")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("next"),
                )
                .arg(Arg::new("next").long("next").action(ArgAction::SetTrue))
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(
                    Command::new("locale")
                        .about("Show or set the display locale")
                        .arg(Arg::new("value").help("pt-BR|en-US")),
                )
                .subcommand(
                    Command::new("timezone")
                        .about("Show or set the zone whose calendar groups transactions")
                        .arg(Arg::new("value").help("IANA name, e.g. America/Sao_Paulo")),
                ),
        )
}
