// Dobles de prueba para las capacidades inyectadas + captura de logs

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;
use async_trait::async_trait;
use futures::future::{pending, AbortHandle};
use crate::error::{LoginError, NavigationError, StorageError};
use crate::models::{LoginRequest, LoginResponse};
use crate::services::{Delay, KeyValueStore, LoginApi, Navigator, Notifier};
use crate::state::LoginAction;

/// Todo lo que ocurre durante un flujo, en orden
#[derive(Clone, PartialEq, Debug)]
pub enum Event {
    Action(LoginAction),
    Request(LoginRequest),
    StorageSet(String, String),
    Wait(u32),
    Navigate,
    Notify(String),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Responde `reply`, o aborta la tarea y se queda colgado si hay un handle cargado
pub struct FakeApi {
    pub log: EventLog,
    pub reply: Result<LoginResponse, LoginError>,
    pub abort_on_request: RefCell<Option<AbortHandle>>,
}

#[async_trait(?Send)]
impl LoginApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
        self.log.borrow_mut().push(Event::Request(request.clone()));
        let handle = self.abort_on_request.borrow_mut().take();
        if let Some(handle) = handle {
            handle.abort();
            pending::<()>().await;
        }
        self.reply.clone()
    }
}

pub struct MemoryStore {
    pub log: EventLog,
    pub fail: bool,
}

impl KeyValueStore for MemoryStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail {
            return Err(StorageError::Unavailable);
        }
        self.log
            .borrow_mut()
            .push(Event::StorageSet(key.to_string(), value.to_string()));
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            Event::StorageSet(k, v) if k == key => Some(v.clone()),
            _ => None,
        })
    }
}

pub struct FakeNavigator {
    pub log: EventLog,
}

impl Navigator for FakeNavigator {
    fn go_to_root(&self) -> Result<(), NavigationError> {
        self.log.borrow_mut().push(Event::Navigate);
        Ok(())
    }
}

/// Registra la espera y vuelve enseguida, salvo que se le pida abortar la tarea
pub struct FakeDelay {
    pub log: EventLog,
    pub abort_on_wait: RefCell<Option<AbortHandle>>,
}

#[async_trait(?Send)]
impl Delay for FakeDelay {
    async fn wait(&self, duration_ms: u32) {
        self.log.borrow_mut().push(Event::Wait(duration_ms));
        let handle = self.abort_on_wait.borrow_mut().take();
        if let Some(handle) = handle {
            handle.abort();
            pending::<()>().await;
        }
    }
}

pub struct FakeNotifier {
    pub log: EventLog,
}

impl Notifier for FakeNotifier {
    fn success(&self, message: &str) {
        self.log.borrow_mut().push(Event::Notify(message.to_string()));
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|r| r.borrow_mut().push(record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Instala el logger de captura y vacía los registros del hilo actual
pub fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

pub fn captured_logs() -> Vec<String> {
    RECORDS.with(|r| r.borrow().clone())
}
