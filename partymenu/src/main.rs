// Copyright 2023 Jeremy Wall
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
mod cli;
mod migrations;
mod store;
mod web;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{arg, crate_name, crate_version, Command};
use tracing::info;

use crate::store::{DishStore, SelectionStore};

fn create_app() -> Command<'static> {
    Command::new(crate_name!())
        .version(crate_version!())
        .about("Party menu selection service")
        .subcommand_required(true)
        .subcommand(
            Command::new("serve")
                .about("Serve the menu ui and api")
                .arg(
                    arg!(--listen [ADDR] "<host>:<port> to listen on")
                        .default_value("127.0.0.1:3030"),
                )
                .arg(
                    arg!(--db [URL] "Sqlite url for the selection store")
                        .default_value("sqlite://partymenu.db"),
                )
                .arg(arg!(--dishes [FILE] "Dish catalog json to serve instead of the built in one")),
        )
        .subcommand(
            Command::new("dish")
                .about("Parse a dish catalog file and output info about it")
                .arg(arg!(-i --ingredients "Output the ingredient lists."))
                .arg(arg!(<INPUT> "Input dish catalog file to parse")),
        )
}

fn main() {
    tracing_subscriber::fmt::init();
    let matches = create_app().get_matches();
    if let Some(matches) = matches.subcommand_matches("serve") {
        let listen_socket: SocketAddr = matches
            .get_one::<String>("listen")
            .expect("listen has a default")
            .parse()
            .expect("Unable to parse the listen address");
        let db_url = matches
            .get_one::<String>("db")
            .expect("db has a default")
            .clone();
        let dish_file = matches.get_one::<String>("dishes").cloned();
        async_std::task::block_on(async move {
            let dish_store = match dish_file {
                Some(path) => DishStore::from_file(&path)
                    .await
                    .expect("Unable to load the dish catalog"),
                None => DishStore::seeded(),
            };
            info!(dish_count = dish_store.len(), "Loaded dish catalog");
            let selection_store = SelectionStore::new(&db_url)
                .await
                .expect("Unable to open the selection store");
            migrations::run_migration(selection_store.pool()).await;
            web::ui_main(Arc::new(dish_store), selection_store, listen_socket).await;
        });
    } else if let Some(matches) = matches.subcommand_matches("dish") {
        // The input argument is required so it is safe to unwrap this value.
        let input = matches.get_one::<String>("INPUT").unwrap();
        match cli::parse_catalog(input) {
            Ok(records) => {
                cli::output_dish_info(records, matches.contains_id("ingredients"));
            }
            Err(e) => {
                eprintln!("{:?}", e);
            }
        }
    }
}
