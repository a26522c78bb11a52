//! Interactive session
//!
//! A [`Session`] owns the storage for the lifetime of the process and turns
//! each input line into a [`Response`] for the display layer.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::display::travel::format_response;
use crate::error::{CommandError, TravelError, TravelResult};
use crate::models::{Price, Travel};
use crate::services::TravelService;
use crate::storage::file_io::read_line_lossy;
use crate::storage::Storage;

use super::command::Command;

/// Confirmation printed after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Added,
    Deleted,
    Changed,
    Sorted,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Changed => "changed",
            Self::Sorted => "sorted",
        };
        f.write_str(text)
    }
}

/// The outcome of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A list of travels to print as a table
    Table(Vec<Travel>),
    /// A mutation was applied and saved
    Done(Status),
    /// A mutation was applied but the data file could not be rewritten
    Unsaved(Status),
    Average(Price),
    Rejected(CommandError),
    Exit,
}

/// Command interpreter bound to one storage
pub struct Session {
    storage: Storage,
}

impl Session {
    /// Start a session over opened storage
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// The storage this session works on
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Parse and run one input line
    pub fn execute(&mut self, line: &str) -> Response {
        match Command::parse(line, self.storage.store()) {
            Ok(command) => {
                debug!("Running {} command", command.name());
                self.dispatch(command)
            }
            Err(e) => {
                debug!("Rejected input {:?}: {}", line.trim(), e);
                Response::Rejected(e)
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Response {
        let mut service = TravelService::new(&mut self.storage);

        match command {
            Command::Print => Response::Table(service.list().to_vec()),
            Command::Add(travel) => mutation(service.add(travel), Status::Added),
            Command::Del(id) => mutation(service.delete(id), Status::Deleted),
            Command::Edit { id, changes } => {
                mutation(service.edit(id, &changes).map(|_| ()), Status::Changed)
            }
            Command::Sort => mutation(service.sort_by_date(), Status::Sorted),
            Command::Find(max_price) => Response::Table(service.find(max_price)),
            Command::Avg => match service.average_price() {
                Ok(price) => Response::Average(price),
                Err(e) => Response::Rejected(e),
            },
            Command::Exit => Response::Exit,
        }
    }

    /// Read commands until `exit` or end of input, writing each response
    ///
    /// Only failures of the input or output streams are returned.
    ///
    /// Lines that are not valid UTF-8 are read lossily and answered like
    /// any other line.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        while let Some(line) = read_line_lossy(&mut input)? {
            let response = self.execute(&line);
            if response == Response::Exit {
                break;
            }
            writeln!(output, "{}", format_response(&response))?;
            output.flush()?;
        }
        Ok(())
    }
}

/// Map the result of a mutating service call onto a response
fn mutation(result: TravelResult<()>, status: Status) -> Response {
    match result {
        Ok(()) => Response::Done(status),
        Err(TravelError::Rejected(e)) => Response::Rejected(e),
        Err(e) => {
            warn!("Change kept in memory only: {}", e);
            Response::Unsaved(status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TravelPaths;
    use crate::models::TravelId;
    use crate::storage::init::DEFAULT_DATA;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_session() -> (TempDir, Session) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TravelPaths::with_file(temp_dir.path().join("db.csv")).unwrap();
        let (storage, _) = Storage::open(paths);
        (temp_dir, Session::new(storage))
    }

    fn file_content(session: &Session) -> String {
        fs::read_to_string(session.storage().paths().data_file()).unwrap()
    }

    fn ids(response: Response) -> Vec<u16> {
        match response {
            Response::Table(travels) => travels.iter().map(|t| t.id.value()).collect(),
            other => panic!("expected a table, got {:?}", other),
        }
    }

    #[test]
    fn test_print_lists_all_travels() {
        let (_temp_dir, mut session) = create_test_session();
        assert_eq!(
            ids(session.execute("print")),
            vec![101, 102, 103, 104, 105]
        );
    }

    #[test]
    fn test_add_grows_collection() {
        let (_temp_dir, mut session) = create_test_session();

        let response = session.execute("add 106;oslo;01/02/2022;4;99.90;boat");
        assert_eq!(response, Response::Done(Status::Added));
        assert_eq!(session.storage().store().len(), 6);
        assert!(session
            .storage()
            .store()
            .contains(TravelId::parse("106").unwrap()));
        assert!(file_content(&session).ends_with("106;Oslo;01/02/2022;4;99.90;BOAT\n"));
    }

    #[test]
    fn test_add_with_short_id_changes_nothing() {
        let (_temp_dir, mut session) = create_test_session();

        let response = session.execute("add 12;Oslo;01/02/2022;4;99.90;boat");
        assert_eq!(response, Response::Rejected(CommandError::WrongId));
        assert_eq!(session.storage().store().len(), 5);
        assert_eq!(file_content(&session), DEFAULT_DATA);
    }

    #[test]
    fn test_add_then_del_restores_file() {
        let (_temp_dir, mut session) = create_test_session();

        session.execute("add 150;Oslo;01/02/2022;4;99.90;boat");
        assert_eq!(session.execute("del 150"), Response::Done(Status::Deleted));
        assert_eq!(file_content(&session), DEFAULT_DATA);
    }

    #[test]
    fn test_edit_with_empty_fields_keeps_record() {
        let (_temp_dir, mut session) = create_test_session();
        let before = session.storage().store().as_slice().to_vec();

        assert_eq!(
            session.execute("edit 103;;;;;"),
            Response::Done(Status::Changed)
        );
        assert_eq!(session.storage().store().as_slice(), before.as_slice());
    }

    #[test]
    fn test_edit_changes_fields() {
        let (_temp_dir, mut session) = create_test_session();

        session.execute("edit 101;riga-center;;;175");
        let travel = &session.storage().store().as_slice()[0];
        assert_eq!(travel.city, "Riga Center");
        assert_eq!(travel.price.to_string(), "175.00");
        assert_eq!(travel.days, 5);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let (_temp_dir, mut session) = create_test_session();

        assert_eq!(session.execute("sort"), Response::Done(Status::Sorted));
        let once = file_content(&session);
        session.execute("sort");
        assert_eq!(file_content(&session), once);
        assert_eq!(ids(session.execute("print")), vec![102, 104, 101, 105, 103]);
    }

    #[test]
    fn test_find_by_max_price() {
        let (_temp_dir, mut session) = create_test_session();

        assert_eq!(ids(session.execute("find 300.00")), vec![101, 102, 104]);
        assert_eq!(ids(session.execute("find 100")), Vec::<u16>::new());
        assert_eq!(ids(session.execute("find -1")), Vec::<u16>::new());
    }

    #[test]
    fn test_average() {
        let (_temp_dir, mut session) = create_test_session();
        assert_eq!(
            session.execute("avg"),
            Response::Average(Price::from_cents(44020))
        );
    }

    #[test]
    fn test_average_of_very_expensive_travels() {
        let (_temp_dir, mut session) = create_test_session();
        for id in ["101", "102", "103", "104", "105"] {
            session.execute(&format!("del {}", id));
        }

        session.execute("add 201;a;01/01/2022;1;50000000000000000;bus");
        session.execute("add 202;b;01/01/2022;1;50000000000000000;bus");

        assert_eq!(
            session.execute("avg"),
            Response::Average(Price::from_cents(5_000_000_000_000_000_000))
        );
    }

    #[test]
    fn test_average_of_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("db.csv");
        fs::write(&path, "").unwrap();
        let (storage, _) = Storage::open(TravelPaths::with_file(&path).unwrap());
        let mut session = Session::new(storage);

        assert_eq!(
            session.execute("avg"),
            Response::Rejected(CommandError::NoTravels)
        );
    }

    #[test]
    fn test_save_failure_keeps_change() {
        let (_temp_dir, mut session) = create_test_session();
        let path = session.storage().paths().data_file().to_path_buf();
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let response = session.execute("del 101");
        assert_eq!(response, Response::Unsaved(Status::Deleted));
        assert_eq!(session.storage().store().len(), 4);
    }

    #[test]
    fn test_unknown_command() {
        let (_temp_dir, mut session) = create_test_session();
        assert_eq!(
            session.execute("help"),
            Response::Rejected(CommandError::WrongCommand)
        );
    }

    #[test]
    fn test_run_stops_at_exit() {
        let (_temp_dir, mut session) = create_test_session();
        let input = Cursor::new("avg\nfoo\nexit\navg\n");
        let mut output = Vec::new();

        session.run(input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "average=440.20\nwrong command\n");
    }

    #[test]
    fn test_run_continues_after_invalid_utf8_line() {
        let (_temp_dir, mut session) = create_test_session();
        let input = Cursor::new(b"avg\nadd 106;K\xf6ln;01/01/2022;2;10;bus\navg\nexit\n".to_vec());
        let mut output = Vec::new();

        session.run(input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "average=440.20\nadded\naverage=368.50\n");
        let added = session
            .storage()
            .store()
            .find_by_id(TravelId::parse("106").unwrap())
            .cloned()
            .unwrap();
        assert_eq!(added.city, "K\u{fffd}ln");
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let (_temp_dir, mut session) = create_test_session();
        let mut output = Vec::new();

        session.run(Cursor::new("del 105"), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "deleted\n");
    }
}
