// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use schedview_api::{ScheduleApi, ScheduleId};
use schedview_core::{CAMPUSES, LoadPhase, SyncEngine, TIMES};

use crate::render::ScheduleFormatter;

/// Interactive browsing session over stdin/stdout.
pub struct Browser {
    engine: SyncEngine<ScheduleApi>,
    formatter: ScheduleFormatter,
}

impl Browser {
    pub fn new(engine: SyncEngine<ScheduleApi>) -> Self {
        Self {
            engine,
            formatter: ScheduleFormatter::new(),
        }
    }

    /// Runs the session until the user quits or stdin closes.
    pub async fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.load_fresh().await;
        print_help();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            prompt().await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };

            let line = line.trim();
            if line.is_empty() {
                self.load_more().await;
                continue;
            }

            let (cmd, arg) = match line.split_once(char::is_whitespace) {
                Some((cmd, arg)) => (cmd, arg.trim()),
                None => (line, ""),
            };
            match cmd {
                "q" | "quit" => break,
                "h" | "help" => print_help(),
                "r" | "reload" => self.load_fresh().await,
                "f" | "fav" => self.toggle_favorite(arg).await,
                "c" | "campus" => self.toggle_campus(arg).await,
                "t" | "time" => self.toggle_time(arg).await,
                "o" | "only" => self.toggle_favorites_only().await,
                "u" | "url" => self.print_share_link(),
                other => println!("{} unknown command: {other} (h for help)", "Error:".red()),
            }
        }

        Ok(())
    }

    /// Resets the collection and renders page 0.
    async fn load_fresh(&mut self) {
        println!("{}", self.describe_filter());
        if let Err(e) = self.engine.reset_and_load().await {
            println!("{} {e}", "Error:".red());
            println!("(r to retry)");
            return;
        }
        self.render_range(0);
        self.print_footer();
    }

    /// Fetches the next page and renders only the newly appended cards.
    async fn load_more(&mut self) {
        if self.engine.phase() != LoadPhase::Ready {
            println!("{} not loaded yet (r to retry)", "Error:".red());
            return;
        }
        let before = self.engine.len();
        match self.engine.request_more().await {
            Ok(true) => {
                self.render_range(before);
                self.print_footer();
            }
            Ok(false) => {
                if self.engine.is_exhausted() {
                    println!("No more schedules.");
                }
            }
            Err(e) => println!("{} {e}", "Error:".red()),
        }
    }

    async fn toggle_favorite(&mut self, arg: &str) {
        let Ok(raw) = arg.parse::<i64>() else {
            println!("{} usage: f <schedule id>", "Error:".red());
            return;
        };
        let id = ScheduleId::from(raw);
        match self.engine.toggle_favorite(id).await {
            Ok(true) => println!("{} #{id}", "Favorited".yellow()),
            Ok(false) => println!("Unfavorited #{id}"),
            Err(e) => println!("{} {e}", "Error:".red()),
        }
    }

    async fn toggle_campus(&mut self, arg: &str) {
        let Some(campus) = canonical(&CAMPUSES, arg) else {
            println!("{} campus must be one of: {}", "Error:".red(), CAMPUSES.join(", "));
            return;
        };
        let mut campuses = self.engine.filter().campuses;
        if !campuses.remove(campus) {
            campuses.insert(campus.to_string());
        }
        if let Err(e) = self.engine.set_campuses(campuses).await {
            println!("{} {e}", "Error:".red());
            return;
        }
        self.rerender();
    }

    async fn toggle_time(&mut self, arg: &str) {
        let Some(time) = canonical(&TIMES, arg) else {
            println!("{} time must be one of: {}", "Error:".red(), TIMES.join(", "));
            return;
        };
        let mut times = self.engine.filter().times;
        if !times.remove(time) {
            times.insert(time.to_string());
        }
        if let Err(e) = self.engine.set_times(times).await {
            println!("{} {e}", "Error:".red());
            return;
        }
        self.rerender();
    }

    async fn toggle_favorites_only(&mut self) {
        let favorites_only = !self.engine.filter().favorites_only;
        if let Err(e) = self.engine.set_favorites_only(favorites_only).await {
            println!("{} {e}", "Error:".red());
            return;
        }
        self.rerender();
    }

    fn print_share_link(&self) {
        let query = self.engine.query_string();
        if query.is_empty() {
            println!("(default view, nothing to share)");
        } else {
            println!("?{query}");
        }
    }

    fn rerender(&self) {
        println!("{}", self.describe_filter());
        self.render_range(0);
        self.print_footer();
    }

    fn render_range(&self, from: usize) {
        let items = self.engine.items();
        if items.is_empty() {
            println!("No schedules match the current filters.");
            return;
        }
        for schedule in &items[from..] {
            let favorited = self.engine.is_favorite(schedule.schedule_id);
            println!("{}", self.formatter.format(schedule, favorited));
        }
    }

    fn print_footer(&self) {
        let len = self.engine.len();
        if self.engine.is_exhausted() {
            println!("{len} schedules (all loaded)");
        } else {
            println!("{len} schedules loaded (empty line for more)");
        }
    }

    fn describe_filter(&self) -> String {
        let filter = self.engine.filter();
        let mut parts = Vec::new();
        if filter.campuses.len() < CAMPUSES.len() {
            let joined: Vec<_> = filter.campuses.iter().cloned().collect();
            parts.push(format!("campuses: {}", joined.join("/")));
        }
        if filter.times.len() < TIMES.len() {
            let joined: Vec<_> = filter.times.iter().cloned().collect();
            parts.push(format!("times: {}", joined.join("/")));
        }
        if filter.favorites_only {
            parts.push("favorites only".to_string());
        }
        if parts.is_empty() {
            "All schedules".bold().to_string()
        } else {
            parts.join(", ").bold().to_string()
        }
    }
}

/// Matches user input against a fixed vocabulary, ignoring case.
fn canonical<'a>(vocabulary: &[&'a str], input: &str) -> Option<&'a str> {
    vocabulary
        .iter()
        .find(|v| v.eq_ignore_ascii_case(input))
        .copied()
}

async fn prompt() -> Result<(), Box<dyn Error>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"> ").await?;
    stdout.flush().await?;
    Ok(())
}

fn print_help() {
    println!(
        "\
Commands:
  <empty>      load more schedules
  f <id>       toggle favorite
  c <campus>   toggle a campus filter ({})
  t <time>     toggle a time filter ({})
  o            toggle favorites-only
  u            print a shareable query string
  r            reload
  h            help
  q            quit",
        CAMPUSES.join(", "),
        TIMES.join(", "),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_matches_case_insensitively() {
        assert_eq!(canonical(&CAMPUSES, "online"), Some("Online"));
        assert_eq!(canonical(&TIMES, "EVENING"), Some("Evening"));
        assert_eq!(canonical(&CAMPUSES, "Mars"), None);
    }
}
