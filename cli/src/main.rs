// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

// The engine is single-threaded by design, so a current-thread runtime
// is all we need.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    schedview_cli::run().await
}
