use std::io::Write;
use std::sync::Arc;

use tokio::io::AsyncBufRead;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

use business::application::catalog::screen::{CatalogScreen, DeleteOutcome, ScreenError};
use business::domain::notification::Notification;
use business::domain::product::form::ProductForm;

use super::command::{Command, HELP};
use super::image;
use super::prompt::ConsoleInput;
use super::render;

/// Interactive loop driving the catalog screen from console commands.
pub struct Session<R> {
    screen: CatalogScreen,
    input: Arc<ConsoleInput<R>>,
}

impl<R> Session<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(screen: CatalogScreen, input: Arc<ConsoleInput<R>>) -> Self {
        Self { screen, input }
    }

    /// Runs until `quit` or end of input.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut notifications = self.screen.notifications().subscribe();

        println!("Product catalog. Type `help` for commands.");
        self.screen.mount().await;
        self.show_screen();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = self.input.next_line().await? else {
                break;
            };
            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command).await,
                Ok(None) => {}
                Err(e) => println!("{}", e),
            }
            drain(&mut notifications);
        }

        tracing::debug!("Catalog session finished");
        Ok(())
    }

    async fn execute(&mut self, command: Command) {
        match command {
            Command::List => {
                self.leave_modal();
                self.show_screen();
            }
            Command::Search(query) => {
                self.leave_modal();
                self.screen.set_search_query(query);
                self.show_screen();
            }
            Command::Add => {
                self.screen.open_create();
                self.show_screen();
            }
            Command::View(id) => self.show_or_report(|screen| screen.open_view(id)),
            Command::Edit(Some(id)) => self.show_or_report(|screen| screen.open_edit(id)),
            Command::Edit(None) => self.show_or_report(CatalogScreen::edit_selected),
            Command::Delete(id) => match self.screen.delete(id).await {
                Ok(DeleteOutcome::Deleted) => self.show_screen(),
                Ok(DeleteOutcome::Declined) => println!("Deletion cancelled."),
                Err(e) => println!("{}", render::screen_error(&e)),
            },
            Command::Refresh(id) => match self.screen.refresh(id).await {
                Ok(_) => self.show_screen(),
                Err(e) => println!("{}", render::screen_error(&e)),
            },
            Command::Set(field, value) => self.edit_form(|form| form.set_field(field, &value)),
            Command::Image(source) => match image::resolve(&source).await {
                Ok(image) => self.edit_form(|form| form.set_image(Some(image))),
                Err(e) => println!("{:#}", e),
            },
            Command::ClearImage => self.edit_form(|form| form.set_image(None)),
            Command::Submit => self.submit().await,
            Command::Cancel | Command::Close => {
                self.screen.close();
                self.show_screen();
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => {}
        }
    }

    async fn submit(&mut self) {
        if let Some(form) = self.screen.view().form() {
            println!("{}", form.submit_label(true));
        }
        match self.screen.submit().await {
            Ok(product) => {
                println!("Saved product #{}.", product.id());
                self.show_screen();
            }
            Err(ScreenError::Invalid(_)) => self.show_screen(),
            Err(e) => println!("{}", render::screen_error(&e)),
        }
    }

    /// Returns to the list, telling the operator when an open form was dropped.
    fn leave_modal(&mut self) {
        if self.screen.close() {
            println!("{}", render::DISCARDED_FORM);
        }
    }

    fn show_or_report(&mut self, open: impl FnOnce(&mut CatalogScreen) -> Result<(), ScreenError>) {
        match open(&mut self.screen) {
            Ok(()) => self.show_screen(),
            Err(e) => println!("{}", render::screen_error(&e)),
        }
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut ProductForm)) {
        match self.screen.form_mut() {
            Some(form) => {
                edit(form);
                self.show_screen();
            }
            None => println!("{}", render::screen_error(&ScreenError::NoOpenForm)),
        }
    }

    fn show_screen(&self) {
        let products = self.screen.visible_products();
        println!(
            "{}",
            render::screen(
                self.screen.view(),
                &products,
                self.screen.search_query(),
                self.screen.is_loading()
            )
        );
    }
}

/// Prints every notification published since the last command.
fn drain(notifications: &mut Receiver<Notification>) {
    loop {
        match notifications.try_recv() {
            Ok(notification) => println!("{}", render::notification(&notification)),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!("{} notifications were dropped", skipped)
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
}
