//! Interactive text menu over the ledger store.
//!
//! Reads one line per prompt and writes plain text. Generic over the async
//! reader and writer so the whole dialogue can be driven from memory in
//! tests; the binary wires it to stdin and stdout.

use crate::reducer::{LedgerEnvironment, LedgerReducer};
use crate::types::{LedgerAction, LedgerState, SeatNumber};
use railseat_runtime::{Store, StoreError};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

/// Store type driving a single train's ledger
pub type LedgerStore = Store<LedgerState, LedgerAction, LedgerEnvironment, LedgerReducer>;

const MENU: &str = "\n1. Display Train Schedule\n2. Display Available Seats\n3. Book Ticket\n\
4. Cancel Ticket\n5. Display Passenger's Tickets\n6. Exit\n7. Cancel Ticket by Seat Number\n\
Enter your choice: ";

/// Errors that end the menu loop
#[derive(Error, Debug)]
pub enum MenuError {
    /// Reading input or writing output failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store refused an action
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One entry of the main menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: route summary followed by the seat table
    Schedule,
    /// 2: seat table
    Seats,
    /// 3: book a seat
    Book,
    /// 4: cancel by passenger name
    Cancel,
    /// 5: passenger roster
    Passengers,
    /// 6: leave the menu
    Exit,
    /// 7: cancel by seat number
    CancelBySeat,
}

impl MenuChoice {
    /// Parses a menu line, ignoring surrounding whitespace
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Schedule),
            "2" => Some(Self::Seats),
            "3" => Some(Self::Book),
            "4" => Some(Self::Cancel),
            "5" => Some(Self::Passengers),
            "6" => Some(Self::Exit),
            "7" => Some(Self::CancelBySeat),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Line-oriented menu session
pub struct Menu<'a, R, W> {
    store: &'a LedgerStore,
    lines: Lines<R>,
    output: W,
}

impl<'a, R, W> Menu<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a session reading from `input` and writing to `output`
    pub fn new(store: &'a LedgerStore, input: R, output: W) -> Self {
        Self {
            store,
            lines: input.lines(),
            output,
        }
    }

    /// Runs until the user exits or input ends, then shuts the store down.
    ///
    /// Returns the writer so callers can inspect buffered output.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError`] if the terminal fails or the store is already
    /// shut down.
    pub async fn run(mut self) -> Result<W, MenuError> {
        loop {
            self.say(MENU).await?;
            let Some(line) = self.lines.next_line().await? else {
                self.say("\nExiting program.\n").await?;
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                self.say("Invalid choice! Please try again.\n").await?;
                continue;
            };

            tracing::debug!(?choice, "Menu choice");
            if let Flow::Exit = self.handle(choice).await? {
                break;
            }
        }

        self.store.shutdown();
        Ok(self.output)
    }

    async fn handle(&mut self, choice: MenuChoice) -> Result<Flow, MenuError> {
        match choice {
            MenuChoice::Schedule => {
                let text = self
                    .store
                    .state(|s| {
                        format!(
                            "\nTrain Schedule:\n{}{}",
                            s.train.schedule(),
                            s.train.seat_chart()
                        )
                    })
                    .await;
                self.say(&text).await?;
            },
            MenuChoice::Seats => {
                let text = self.store.state(|s| s.train.seat_chart().to_string()).await;
                self.say(&text).await?;
            },
            MenuChoice::Book => return self.book().await,
            MenuChoice::Cancel => return self.cancel_by_name().await,
            MenuChoice::CancelBySeat => return self.cancel_by_seat().await,
            MenuChoice::Passengers => {
                let text = self.store.state(|s| s.train.manifest().to_string()).await;
                self.say(&text).await?;
            },
            MenuChoice::Exit => {
                self.say("Exiting program.\n").await?;
                return Ok(Flow::Exit);
            },
        }
        Ok(Flow::Continue)
    }

    async fn book(&mut self) -> Result<Flow, MenuError> {
        let Some(name) = self.prompt("Enter Passenger Name: ").await? else {
            return self.end_of_input().await;
        };
        let Some(contact_number) = self.prompt("Enter Contact Number: ").await? else {
            return self.end_of_input().await;
        };
        let Some(seat) = self.prompt("Enter Seat Number: ").await? else {
            return self.end_of_input().await;
        };

        let Ok(seat) = seat.trim().parse::<u32>() else {
            self.say("Invalid seat number!\n").await?;
            return Ok(Flow::Continue);
        };

        self.store
            .send(LedgerAction::BookSeat {
                name,
                contact_number,
                seat,
            })
            .await?;

        let report = self
            .store
            .state(|s| match &s.last_error {
                Some(error) => format!("{error}\n"),
                None => s
                    .train
                    .passenger_on(SeatNumber::new(seat))
                    .map_or_else(String::new, |p| {
                        format!(
                            "Ticket booked successfully!\nPassenger Name: {}\n\
                             Contact Number: {}\nSeat Number: {}\n",
                            p.name(),
                            p.contact_number(),
                            p.seat()
                        )
                    }),
            })
            .await;
        self.say(&report).await?;
        Ok(Flow::Continue)
    }

    async fn cancel_by_name(&mut self) -> Result<Flow, MenuError> {
        let Some(name) = self.prompt("Enter Passenger Name: ").await? else {
            return self.end_of_input().await;
        };

        self.store.send(LedgerAction::CancelByName { name }).await?;
        self.report_cancellation().await?;
        Ok(Flow::Continue)
    }

    async fn cancel_by_seat(&mut self) -> Result<Flow, MenuError> {
        let Some(seat) = self.prompt("Enter Seat Number: ").await? else {
            return self.end_of_input().await;
        };

        let Ok(seat) = seat.trim().parse::<u32>() else {
            self.say("Invalid seat number!\n").await?;
            return Ok(Flow::Continue);
        };

        self.store.send(LedgerAction::CancelBySeat { seat }).await?;
        self.report_cancellation().await?;
        Ok(Flow::Continue)
    }

    async fn report_cancellation(&mut self) -> Result<(), MenuError> {
        let report = self
            .store
            .state(|s| match &s.last_error {
                Some(error) => format!("{error}\n"),
                None => "Ticket canceled successfully.\n".to_string(),
            })
            .await;
        self.say(&report).await
    }

    async fn end_of_input(&mut self) -> Result<Flow, MenuError> {
        self.say("\nExiting program.\n").await?;
        Ok(Flow::Exit)
    }

    async fn prompt(&mut self, text: &str) -> Result<Option<String>, MenuError> {
        self.say(text).await?;
        Ok(self.lines.next_line().await?)
    }

    async fn say(&mut self, text: &str) -> Result<(), MenuError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
