//! Demo screens for the frameform binary.
//!
//! An in-memory account store stands in for a real backend. Every handler
//! holds a shared handle to it and runs nested menus and forms through its
//! `MenuContext`.

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use frameform::domain::{Field, MenuOption, RequestCard, UserCard};
use frameform::ui::widgets::{form, validators, SelectionHandler, Validator};
use frameform::{EngineError, Form, Menu, MenuContext, Result};

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Account operation failures, shown to the user verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Username does not exist.")]
    UnknownUser,

    #[error("Username and password do not match.")]
    WrongPassword,

    #[error("Username already exists.")]
    UsernameTaken,

    #[error("Email already exists.")]
    EmailTaken,

    #[error("You are already friends with @{0}.")]
    AlreadyFriends(String),

    #[error("You cannot send a request to yourself.")]
    SelfRequest,

    #[error("No pending request from @{0}.")]
    NoRequest(String),
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
}

impl Account {
    fn card(&self) -> UserCard {
        UserCard {
            user_id: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone)]
struct Request {
    from: String,
    to: String,
    message: String,
}

#[derive(Debug, Clone)]
struct Message {
    from: String,
    to: String,
    body: String,
}

/// Accounts, friendships, pending requests and sent messages
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
    friendships: Vec<(String, String)>,
    requests: Vec<Request>,
    messages: Vec<Message>,
}

pub type SharedStore = Rc<RefCell<AccountStore>>;

type AccountResult<T> = std::result::Result<T, AccountError>;

impl AccountStore {
    /// A store with a few users, one friendship and one pending request
    pub fn seeded() -> Self {
        let mut store = Self::default();
        for (username, first, last) in [
            ("ada", "Ada", "Lovelace"),
            ("alan", "Alan", "Turing"),
            ("grace", "Grace", "Hopper"),
        ] {
            store.accounts.push(Account {
                username: username.to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!("{}@example.com", username),
                password: "password".to_string(),
                date_of_birth: "1900-01-01".to_string(),
            });
        }
        store.friendships.push(("ada".to_string(), "alan".to_string()));
        store.requests.push(Request {
            from: "grace".to_string(),
            to: "ada".to_string(),
            message: "Want to compare compilers?".to_string(),
        });
        store
    }

    fn account(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    pub fn log_in(&self, username: &str, password: &str) -> AccountResult<UserCard> {
        let account = self.account(username).ok_or(AccountError::UnknownUser)?;
        if account.password != password {
            return Err(AccountError::WrongPassword);
        }
        Ok(account.card())
    }

    pub fn sign_up(&mut self, account: Account) -> AccountResult<UserCard> {
        if self.account(&account.username).is_some() {
            return Err(AccountError::UsernameTaken);
        }
        if self.accounts.iter().any(|a| a.email == account.email) {
            return Err(AccountError::EmailTaken);
        }
        tracing::debug!(
            username = %account.username,
            date_of_birth = %account.date_of_birth,
            "account stored"
        );
        let card = account.card();
        self.accounts.push(account);
        Ok(card)
    }

    fn are_friends(&self, a: &str, b: &str) -> bool {
        self.friendships
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn friends_of(&self, username: &str) -> Vec<UserCard> {
        self.friendships
            .iter()
            .filter_map(|(a, b)| {
                if a == username {
                    Some(b)
                } else if b == username {
                    Some(a)
                } else {
                    None
                }
            })
            .filter_map(|friend| self.account(friend).map(Account::card))
            .collect()
    }

    pub fn requests_for(&self, username: &str) -> Vec<RequestCard> {
        self.requests
            .iter()
            .filter(|r| r.to == username)
            .map(|r| RequestCard {
                from_user: r.from.clone(),
                from_name: self
                    .account(&r.from)
                    .map(|a| a.card().full_name())
                    .unwrap_or_else(|| r.from.clone()),
                message: r.message.clone(),
            })
            .collect()
    }

    pub fn send_request(&mut self, from: &str, to: &str, message: &str) -> AccountResult<()> {
        if from == to {
            return Err(AccountError::SelfRequest);
        }
        if self.account(to).is_none() {
            return Err(AccountError::UnknownUser);
        }
        if self.are_friends(from, to) {
            return Err(AccountError::AlreadyFriends(to.to_string()));
        }
        self.requests.push(Request {
            from: from.to_string(),
            to: to.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }

    /// Accept the request `from` sent to `to`
    pub fn accept_request(&mut self, to: &str, from: &str) -> AccountResult<()> {
        let before = self.requests.len();
        self.requests.retain(|r| !(r.to == to && r.from == from));
        if self.requests.len() == before {
            return Err(AccountError::NoRequest(from.to_string()));
        }
        if !self.are_friends(to, from) {
            self.friendships.push((to.to_string(), from.to_string()));
        }
        Ok(())
    }

    pub fn send_message(&mut self, from: &str, to: &str, body: &str) {
        self.messages.push(Message {
            from: from.to_string(),
            to: to.to_string(),
            body: body.to_string(),
        });
    }

    /// Messages sent to `username` as (sender name, body), oldest first
    pub fn inbox(&self, username: &str) -> Vec<(String, String)> {
        self.messages
            .iter()
            .filter(|m| m.to == username)
            .map(|m| {
                let sender = self
                    .account(&m.from)
                    .map(|a| a.card().full_name())
                    .unwrap_or_else(|| m.from.clone());
                (sender, m.body.clone())
            })
            .collect()
    }

    /// Remove an account and everything that references it
    pub fn delete(&mut self, username: &str) {
        self.accounts.retain(|a| a.username != username);
        self.friendships.retain(|(a, b)| a != username && b != username);
        self.requests.retain(|r| r.from != username && r.to != username);
        self.messages.retain(|m| m.from != username && m.to != username);
    }
}

fn pattern(index: usize, regex: &str, message: &str) -> Result<Box<dyn Validator>> {
    let validator = validators::matches(index, regex, message)
        .map_err(|e| EngineError::handler(format!("bad pattern {}: {}", regex, e)))?;
    Ok(Box::new(validator))
}

/// The entry menu
pub fn welcome_menu(store: SharedStore) -> Menu<Welcome> {
    Menu::new(
        "Welcome",
        MenuOption::labels(["Log In", "Sign Up", "Exit"]),
        Welcome { store },
    )
}

/// Log In / Sign Up / Exit
pub struct Welcome {
    store: SharedStore,
}

impl SelectionHandler for Welcome {
    fn on_select(&mut self, ctx: &mut MenuContext<'_>, index: usize) -> Result<()> {
        match index {
            0 => self.log_in(ctx),
            1 => self.sign_up(ctx),
            _ => {
                ctx.dismiss();
                Ok(())
            }
        }
    }
}

impl Welcome {
    fn log_in(&mut self, ctx: &mut MenuContext<'_>) -> Result<()> {
        let mut form = Form::new(
            "Log In",
            vec![Field::single("Username"), Field::hidden("Password")],
            validators::non_empty(),
        )
        .submit_label("Log In");
        let Some(values) = ctx.run_form(&mut form)?.into_responses() else {
            return Ok(());
        };

        let attempt = self.store.borrow().log_in(&values[0], &values[1]);
        match attempt {
            Ok(user) => self.enter_dashboard(ctx, user),
            Err(e) => {
                tracing::info!(username = %values[0], "log in rejected: {}", e);
                ctx.add_error(format!("Could Not Log In - {}", e));
                Ok(())
            }
        }
    }

    fn sign_up(&mut self, ctx: &mut MenuContext<'_>) -> Result<()> {
        let validator = validators::all(vec![
            Box::new(validators::non_empty()),
            pattern(3, EMAIL_PATTERN, "Please enter a valid email address.")?,
            pattern(5, DATE_PATTERN, "Date of birth must be written as YYYY-MM-DD.")?,
        ]);
        let mut form = Form::new(
            "Sign Up",
            vec![
                Field::single("Username"),
                Field::single("First Name"),
                Field::single("Last Name"),
                Field::single("Email"),
                Field::hidden("Password"),
                Field::single("Date of Birth (YYYY-MM-DD)"),
            ],
            validator,
        )
        .submit_label("Join the Club!");
        let Some(mut values) = ctx.run_form(&mut form)?.into_responses() else {
            return Ok(());
        };

        let date_of_birth = values.remove(5);
        let password = values.remove(4);
        let email = values.remove(3);
        let last_name = values.remove(2);
        let first_name = values.remove(1);
        let username = values.remove(0);
        let created = self.store.borrow_mut().sign_up(Account {
            username,
            first_name,
            last_name,
            email,
            password,
            date_of_birth,
        });
        match created {
            Ok(user) => {
                tracing::info!(username = %user.user_id, "account created");
                self.enter_dashboard(ctx, user)
            }
            Err(e) => {
                ctx.add_error(format!("Could Not Sign Up - {}", e));
                Ok(())
            }
        }
    }

    fn enter_dashboard(&mut self, ctx: &mut MenuContext<'_>, user: UserCard) -> Result<()> {
        tracing::info!(username = %user.user_id, "logged in");
        let mut dashboard = dashboard_menu(Rc::clone(&self.store), user);
        ctx.run_menu(&mut dashboard)?;
        if dashboard.handler().deleted {
            ctx.notify("Account deleted.");
        }
        Ok(())
    }
}

fn dashboard_menu(store: SharedStore, user: UserCard) -> Menu<Dashboard> {
    Menu::new(
        "Dashboard",
        MenuOption::labels([
            "Friends",
            "Friend Requests",
            "Inbox",
            "Log Out",
            "Delete Account",
        ]),
        Dashboard {
            store,
            user,
            deleted: false,
        },
    )
}

/// Home screen of a logged-in user
pub struct Dashboard {
    store: SharedStore,
    user: UserCard,
    deleted: bool,
}

impl SelectionHandler for Dashboard {
    fn on_select(&mut self, ctx: &mut MenuContext<'_>, index: usize) -> Result<()> {
        match index {
            0 => {
                let options = friend_options(&self.store.borrow(), &self.user.user_id);
                let handler = Friends {
                    store: Rc::clone(&self.store),
                    user: self.user.clone(),
                };
                ctx.run_menu(&mut Menu::new("Friends", options, handler).dismissable(true))
            }
            1 => {
                let options = request_options(&self.store.borrow(), &self.user.user_id);
                let handler = Requests {
                    store: Rc::clone(&self.store),
                    user: self.user.clone(),
                };
                let mut menu = Menu::new("Friend Requests", options, handler).dismissable(true);
                ctx.run_menu(&mut menu)
            }
            2 => {
                let messages = self.store.borrow().inbox(&self.user.user_id);
                let options = messages
                    .iter()
                    .map(|(sender, body)| {
                        MenuOption::label(format!("{}: {}", sender, body.replace('\n', " ")))
                    })
                    .collect();
                let handler = Inbox {
                    bodies: messages.into_iter().map(|(_, body)| body).collect(),
                };
                ctx.run_menu(&mut Menu::new("Inbox", options, handler).dismissable(true))
            }
            3 => {
                ctx.dismiss();
                Ok(())
            }
            _ => self.delete_account(ctx),
        }
    }

    fn on_dismiss(&mut self) {
        tracing::info!(username = %self.user.user_id, "logged out");
    }
}

impl Dashboard {
    fn delete_account(&mut self, ctx: &mut MenuContext<'_>) -> Result<()> {
        let store = Rc::clone(&self.store);
        let username = self.user.user_id.clone();
        let check_password = form::from_fn(move |values, report| {
            let password = values.get(0).unwrap_or_default();
            match store.borrow().log_in(&username, password) {
                Ok(_) => true,
                Err(e) => {
                    report.error(e.to_string());
                    false
                }
            }
        });
        let mut form = Form::new(
            "Delete Account",
            vec![Field::hidden("Password")],
            check_password,
        )
        .submit_label("Delete Forever");

        if ctx.run_form(&mut form)?.into_responses().is_some() {
            self.store.borrow_mut().delete(&self.user.user_id);
            self.deleted = true;
            ctx.dismiss();
        }
        Ok(())
    }
}

fn friend_options(store: &AccountStore, username: &str) -> Vec<MenuOption> {
    let mut options: Vec<MenuOption> = store
        .friends_of(username)
        .into_iter()
        .map(MenuOption::from)
        .collect();
    options.push(MenuOption::action("Add Friend"));
    options
}

fn request_options(store: &AccountStore, username: &str) -> Vec<MenuOption> {
    store
        .requests_for(username)
        .into_iter()
        .map(MenuOption::from)
        .collect()
}

/// Friend list: message a friend or send a new request
struct Friends {
    store: SharedStore,
    user: UserCard,
}

impl SelectionHandler for Friends {
    fn on_select(&mut self, ctx: &mut MenuContext<'_>, _index: usize) -> Result<()> {
        match ctx.selected_option().cloned() {
            Some(MenuOption::UserCard(friend)) => self.compose(ctx, &friend),
            Some(MenuOption::ActionMarker(_)) => self.add_friend(ctx),
            _ => Ok(()),
        }
    }
}

impl Friends {
    fn compose(&mut self, ctx: &mut MenuContext<'_>, friend: &UserCard) -> Result<()> {
        let mut form = Form::new(
            format!("Message {}", friend.first_name),
            vec![Field::multiline("Message")],
            validators::non_empty(),
        )
        .submit_label("Send");
        let Some(values) = ctx.run_form(&mut form)?.into_responses() else {
            return Ok(());
        };

        self.store
            .borrow_mut()
            .send_message(&self.user.user_id, &friend.user_id, &values[0]);
        ctx.notify(format!("Message sent to {}.", friend.full_name()));
        Ok(())
    }

    fn add_friend(&mut self, ctx: &mut MenuContext<'_>) -> Result<()> {
        let mut form = Form::new(
            "Add Friend",
            vec![Field::single("Username"), Field::multiline("Message")],
            validators::non_empty(),
        )
        .submit_label("Send Request");
        let Some(values) = ctx.run_form(&mut form)?.into_responses() else {
            return Ok(());
        };

        let sent = self
            .store
            .borrow_mut()
            .send_request(&self.user.user_id, &values[0], &values[1]);
        match sent {
            Ok(()) => ctx.notify(format!("Friend request sent to @{}.", values[0])),
            Err(e) => ctx.add_error(e.to_string()),
        }
        Ok(())
    }
}

/// Received messages; selecting one shows it in full
struct Inbox {
    bodies: Vec<String>,
}

impl SelectionHandler for Inbox {
    fn on_select(&mut self, ctx: &mut MenuContext<'_>, index: usize) -> Result<()> {
        if let Some(body) = self.bodies.get(index) {
            ctx.notify(body.clone());
        }
        Ok(())
    }
}

/// Pending requests; selecting one accepts it
struct Requests {
    store: SharedStore,
    user: UserCard,
}

impl SelectionHandler for Requests {
    fn on_select(&mut self, ctx: &mut MenuContext<'_>, _index: usize) -> Result<()> {
        let Some(MenuOption::RequestCard(request)) = ctx.selected_option().cloned() else {
            return Ok(());
        };

        let accepted = self
            .store
            .borrow_mut()
            .accept_request(&self.user.user_id, &request.from_user);
        match accepted {
            Ok(()) => ctx.notify(format!("You are now friends with {}.", request.from_name)),
            Err(e) => ctx.add_error(e.to_string()),
        }
        let options = request_options(&self.store.borrow(), &self.user.user_id);
        ctx.set_options(options);
        Ok(())
    }
}
