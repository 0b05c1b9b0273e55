//! Turns a line of user input into a [`Command`].
//!
//! Input has the shape `<word> <preamble> <prefix>value <prefix>value ...`,
//! e.g. `add-event n/Gala s/2025-01-01 18:00 en/2025-01-01 22:00 al/gala`.
//! A prefix is only recognised at the start of the arguments or right after
//! whitespace, so `en/` is never mistaken for `n/`.

use chrono::NaiveDateTime;
use rolo_core::{
  Command, Index, ValidationError,
  command::{
    AddContact, AddEvent, AddTodo, ContactEdits, DeleteContact, DeleteEvent, DeleteTodo,
    EditContact, EditEvent, EditTodo, EventEdits, FindContacts, LinkEvent, LinkTodo,
    ListContacts, ListEvents, ListTodos, RemarkContact, TodoEdits,
  },
  model::{
    Address, Contact, Email, Event, EventAlias, EventName, Name, Phone, Remark, Tag, Todo,
    TodoTitle,
  },
};
use thiserror::Error;

// ─── Prefixes ────────────────────────────────────────────────────────────────

pub const NAME: &str = "n/";
pub const PHONE: &str = "p/";
pub const EMAIL: &str = "e/";
pub const ADDRESS: &str = "a/";
pub const TAG: &str = "t/";
pub const REMARK: &str = "r/";
pub const START: &str = "s/";
pub const END: &str = "en/";
pub const DESCRIPTION: &str = "d/";
pub const ALIAS: &str = "al/";
pub const CONTACT: &str = "c/";
pub const EVENT: &str = "ev/";
pub const TODO_INDEX: &str = "to/";

const TIMESTAMP_FORMATS: [&str; 4] = [
  "%Y-%m-%d %H:%M",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%dT%H:%M:%S",
];

// ─── Usage ───────────────────────────────────────────────────────────────────

pub const HELP: &str = "\
Contacts
  add n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...
  delete INDEX
  edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...
  list
  find KEYWORD [KEYWORD]...
  remark INDEX r/[REMARK]
Events
  add-event n/NAME s/START en/END [d/DESCRIPTION] [al/ALIAS]
  delete-event INDEX
  edit-event INDEX [n/NAME] [s/START] [en/END] [d/DESCRIPTION] [al/[ALIAS]]
  list-events
  link-event CONTACT_INDEX ev/ALIAS
Todos
  add-todo n/TITLE [d/DESCRIPTION] [c/CONTACT_NAME]
  delete-todo INDEX
  edit-todo INDEX [n/TITLE] [d/DESCRIPTION]
  list-todos
  link-todo CONTACT_INDEX to/TODO_INDEX
Other
  help
  exit
Times are written YYYY-MM-DD HH:MM.";

fn usage(word: &str) -> &'static str {
  HELP
    .lines()
    .find(|line| line.trim_start().split(' ').next() == Some(word))
    .map(str::trim)
    .unwrap_or("")
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("unknown command {0:?}; type `help` to see every command")]
  UnknownCommand(String),

  #[error("invalid command format, expected: {0}")]
  Usage(&'static str),

  #[error("the prefix {0} may only be given once")]
  RepeatedPrefix(&'static str),

  #[error("invalid index {0:?}: indices are positive whole numbers")]
  Index(String),

  #[error("invalid date/time {0:?}: expected YYYY-MM-DD HH:MM")]
  Timestamp(String),

  #[error(transparent)]
  Invalid(#[from] ValidationError),
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

// ─── Tokenizer ───────────────────────────────────────────────────────────────

/// Arguments split into a preamble and prefixed values, in input order.
#[derive(Debug)]
struct ArgMap<'a> {
  preamble: &'a str,
  values:   Vec<(&'static str, &'a str)>,
}

impl<'a> ArgMap<'a> {
  fn tokenize(args: &'a str, prefixes: &[&'static str]) -> Self {
    let mut marks: Vec<(usize, &'static str)> = prefixes
      .iter()
      .flat_map(|&prefix| {
        args
          .match_indices(prefix)
          .filter(move |&(at, _)| at == 0 || args[..at].ends_with(char::is_whitespace))
          .map(move |(at, _)| (at, prefix))
      })
      .collect();
    marks.sort_unstable_by_key(|&(at, _)| at);

    let preamble = args[..marks.first().map_or(args.len(), |&(at, _)| at)].trim();
    let values = marks
      .iter()
      .enumerate()
      .map(|(i, &(at, prefix))| {
        let end = marks.get(i + 1).map_or(args.len(), |&(next, _)| next);
        (prefix, args[at + prefix.len()..end].trim())
      })
      .collect();
    Self { preamble, values }
  }

  fn all(&self, prefix: &str) -> impl Iterator<Item = &'a str> {
    self
      .values
      .iter()
      .filter(move |(p, _)| *p == prefix)
      .map(|&(_, v)| v)
  }

  fn has(&self, prefix: &str) -> bool { self.all(prefix).next().is_some() }

  /// The single value given for `prefix`, if any.
  fn value(&self, prefix: &'static str) -> Result<Option<&'a str>> {
    let mut values = self.all(prefix);
    let first = values.next();
    if values.next().is_some() {
      return Err(ParseError::RepeatedPrefix(prefix));
    }
    Ok(first)
  }

  /// The single value for `prefix`, or a usage error for `word` if absent.
  fn required(&self, prefix: &'static str, word: &str) -> Result<&'a str> {
    self.value(prefix)?.ok_or(ParseError::Usage(usage(word)))
  }
}

// ─── Field parsers ───────────────────────────────────────────────────────────

pub fn parse_index(raw: &str) -> Result<Index> {
  raw
    .trim()
    .parse::<usize>()
    .ok()
    .and_then(|n| Index::from_one_based(n).ok())
    .ok_or_else(|| ParseError::Index(raw.trim().to_string()))
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
  TIMESTAMP_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    .ok_or_else(|| ParseError::Timestamp(raw.to_string()))
}

fn parse_tags(args: &ArgMap<'_>) -> Result<Vec<Tag>> {
  Ok(args.all(TAG).map(Tag::new).collect::<Result<_, _>>()?)
}

/// The preamble as an index; a missing or malformed one is a usage error.
fn preamble_index(args: &ArgMap<'_>, word: &str) -> Result<Index> {
  if args.preamble.is_empty() {
    return Err(ParseError::Usage(usage(word)));
  }
  parse_index(args.preamble)
}

// ─── Entry point ─────────────────────────────────────────────────────────────

/// A parsed line: a command for the organizer, or a front-end action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
  Command(Command),
  Help,
  Exit,
}

impl From<Command> for Input {
  fn from(c: Command) -> Self { Self::Command(c) }
}

pub fn parse(line: &str) -> Result<Input> {
  let line = line.trim();
  let (word, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
  let args = args.trim();

  let command: Command = match word {
    "help" => return Ok(Input::Help),
    "exit" => return Ok(Input::Exit),
    "add" => parse_add_contact(args)?.into(),
    "delete" => DeleteContact { index: parse_bare_index(args, word)? }.into(),
    "edit" => parse_edit_contact(args)?.into(),
    "list" => ListContacts.into(),
    "find" => parse_find(args)?.into(),
    "remark" => parse_remark(args)?.into(),
    "add-event" => parse_add_event(args)?.into(),
    "delete-event" => DeleteEvent { index: parse_bare_index(args, word)? }.into(),
    "edit-event" => parse_edit_event(args)?.into(),
    "list-events" => ListEvents.into(),
    "link-event" => parse_link_event(args)?.into(),
    "add-todo" => parse_add_todo(args)?.into(),
    "delete-todo" => DeleteTodo { index: parse_bare_index(args, word)? }.into(),
    "edit-todo" => parse_edit_todo(args)?.into(),
    "list-todos" => ListTodos.into(),
    "link-todo" => parse_link_todo(args)?.into(),
    other => return Err(ParseError::UnknownCommand(other.to_string())),
  };
  Ok(command.into())
}

fn parse_bare_index(args: &str, word: &str) -> Result<Index> {
  if args.is_empty() {
    return Err(ParseError::Usage(usage(word)));
  }
  parse_index(args)
}

// ─── Contacts ────────────────────────────────────────────────────────────────

fn parse_add_contact(args: &str) -> Result<AddContact> {
  let word = "add";
  let map = ArgMap::tokenize(args, &[NAME, PHONE, EMAIL, ADDRESS, TAG]);
  if !map.preamble.is_empty() {
    return Err(ParseError::Usage(usage(word)));
  }
  let contact = Contact::new(
    Name::new(map.required(NAME, word)?)?,
    Phone::new(map.required(PHONE, word)?)?,
    Email::new(map.required(EMAIL, word)?)?,
    Address::new(map.required(ADDRESS, word)?)?,
    parse_tags(&map)?,
  );
  Ok(AddContact { contact })
}

fn parse_edit_contact(args: &str) -> Result<EditContact> {
  let map = ArgMap::tokenize(args, &[NAME, PHONE, EMAIL, ADDRESS, TAG]);
  let index = preamble_index(&map, "edit")?;

  // A lone empty `t/` clears every tag.
  let tags = if !map.has(TAG) {
    None
  } else if map.all(TAG).eq([""]) {
    Some(Vec::new())
  } else {
    Some(parse_tags(&map)?)
  };

  let edits = ContactEdits {
    name:    map.value(NAME)?.map(Name::new).transpose()?,
    phone:   map.value(PHONE)?.map(Phone::new).transpose()?,
    email:   map.value(EMAIL)?.map(Email::new).transpose()?,
    address: map.value(ADDRESS)?.map(Address::new).transpose()?,
    tags,
  };
  Ok(EditContact { index, edits })
}

fn parse_find(args: &str) -> Result<FindContacts> {
  let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
  if keywords.is_empty() {
    return Err(ParseError::Usage(usage("find")));
  }
  Ok(FindContacts { keywords })
}

fn parse_remark(args: &str) -> Result<RemarkContact> {
  let map = ArgMap::tokenize(args, &[REMARK]);
  let index = preamble_index(&map, "remark")?;
  let remark = Remark::new(map.value(REMARK)?.unwrap_or_default());
  Ok(RemarkContact { index, remark })
}

// ─── Events ──────────────────────────────────────────────────────────────────

fn parse_add_event(args: &str) -> Result<AddEvent> {
  let word = "add-event";
  let map = ArgMap::tokenize(args, &[NAME, START, END, DESCRIPTION, ALIAS]);
  if !map.preamble.is_empty() {
    return Err(ParseError::Usage(usage(word)));
  }
  let event = Event::new(
    EventName::new(map.required(NAME, word)?)?,
    parse_timestamp(map.required(START, word)?)?,
    parse_timestamp(map.required(END, word)?)?,
    map.value(DESCRIPTION)?.unwrap_or_default(),
  )?
  .with_alias(map.value(ALIAS)?.map(EventAlias::new).transpose()?);
  Ok(AddEvent { event })
}

fn parse_edit_event(args: &str) -> Result<EditEvent> {
  let map = ArgMap::tokenize(args, &[NAME, START, END, DESCRIPTION, ALIAS]);
  let index = preamble_index(&map, "edit-event")?;
  let edits = EventEdits {
    name:        map.value(NAME)?.map(EventName::new).transpose()?,
    start:       map.value(START)?.map(parse_timestamp).transpose()?,
    end:         map.value(END)?.map(parse_timestamp).transpose()?,
    description: map.value(DESCRIPTION)?.map(str::to_string),
    alias:       map.value(ALIAS)?.map(parse_alias_edit).transpose()?,
  };
  Ok(EditEvent { index, edits })
}

/// An empty `al/` removes the alias.
fn parse_alias_edit(raw: &str) -> Result<Option<EventAlias>> {
  if raw.is_empty() {
    return Ok(None);
  }
  Ok(Some(EventAlias::new(raw)?))
}

fn parse_link_event(args: &str) -> Result<LinkEvent> {
  let word = "link-event";
  let map = ArgMap::tokenize(args, &[EVENT]);
  let contact_index = preamble_index(&map, word)?;
  let alias = EventAlias::new(map.required(EVENT, word)?)?;
  Ok(LinkEvent { contact_index, alias })
}

// ─── Todos ───────────────────────────────────────────────────────────────────

fn parse_add_todo(args: &str) -> Result<AddTodo> {
  let word = "add-todo";
  let map = ArgMap::tokenize(args, &[NAME, DESCRIPTION, CONTACT]);
  if !map.preamble.is_empty() {
    return Err(ParseError::Usage(usage(word)));
  }
  let todo = Todo::new(
    TodoTitle::new(map.required(NAME, word)?)?,
    map.value(DESCRIPTION)?.unwrap_or_default(),
    map.value(CONTACT)?.map(Name::new).transpose()?,
  );
  Ok(AddTodo { todo })
}

fn parse_edit_todo(args: &str) -> Result<EditTodo> {
  let map = ArgMap::tokenize(args, &[NAME, DESCRIPTION]);
  let index = preamble_index(&map, "edit-todo")?;
  let edits = TodoEdits {
    title:       map.value(NAME)?.map(TodoTitle::new).transpose()?,
    description: map.value(DESCRIPTION)?.map(str::to_string),
  };
  Ok(EditTodo { index, edits })
}

fn parse_link_todo(args: &str) -> Result<LinkTodo> {
  let word = "link-todo";
  let map = ArgMap::tokenize(args, &[TODO_INDEX]);
  let contact_index = preamble_index(&map, word)?;
  let todo_index = parse_index(map.required(TODO_INDEX, word)?)?;
  Ok(LinkTodo { todo_index, contact_index })
}
