//! Recording fakes for the transport and bulk channel, shared by the unit
//! tests.

extern crate std;

use core::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use crate::command::Instruction;
use crate::interface::{BulkChannel, ByteTransport};
use crate::{Config, St7789};

/// Everything the driver did to the fakes, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Command(u8),
    Data(u8),
    Select,
    Deselect,
    Reset(bool),
    Flush,
    Configure { len: usize },
    Enable,
    Disable,
    Remaining(usize),
    ClearFlag,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub struct FakeTransport {
    log: Log,
    command: bool,
    register: Rc<Cell<u8>>,
}

impl FakeTransport {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            command: false,
            register: Rc::new(Cell::new(0)),
        }
    }
}

impl ByteTransport for FakeTransport {
    fn send_data(&mut self, byte: u8) {
        let event = if self.command {
            Event::Command(byte)
        } else {
            Event::Data(byte)
        };
        self.log.borrow_mut().push(event);
    }

    fn select(&mut self) {
        self.log.borrow_mut().push(Event::Select);
    }

    fn deselect(&mut self) {
        self.log.borrow_mut().push(Event::Deselect);
    }

    fn command_mode(&mut self) {
        self.command = true;
    }

    fn data_mode(&mut self) {
        self.command = false;
    }

    fn set_reset(&mut self, asserted: bool) {
        self.log.borrow_mut().push(Event::Reset(asserted));
    }

    fn flush(&mut self) {
        self.log.borrow_mut().push(Event::Flush);
    }

    fn data_register(&self) -> *mut u8 {
        self.register.as_ptr()
    }
}

/// Simulated DMA channel: every `remaining()` poll moves `step` bytes and
/// copies them into `sent`.
pub struct FakeChannel {
    log: Log,
    step: usize,
    source: *const u8,
    len: usize,
    done: Cell<usize>,
    enabled: bool,
    pub sent: Rc<RefCell<Vec<u8>>>,
}

impl FakeChannel {
    pub fn new(log: &Log, step: usize) -> Self {
        Self {
            log: log.clone(),
            step,
            source: core::ptr::null(),
            len: 0,
            done: Cell::new(0),
            enabled: false,
            sent: Rc::default(),
        }
    }
}

impl BulkChannel for FakeChannel {
    unsafe fn configure(&mut self, source: *const u8, _destination: *mut u8, len: usize) {
        self.source = source;
        self.len = len;
        self.done.set(0);
        self.log.borrow_mut().push(Event::Configure { len });
    }

    fn enable(&mut self) {
        self.enabled = true;
        self.log.borrow_mut().push(Event::Enable);
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.log.borrow_mut().push(Event::Disable);
    }

    fn remaining(&self) -> usize {
        if self.enabled {
            let done = self.done.get();
            let next = (done + self.step).min(self.len);
            // SAFETY: the driver keeps the configured buffer alive until the
            // channel reports completion
            let moved = unsafe { core::slice::from_raw_parts(self.source.add(done), next - done) };
            self.sent.borrow_mut().extend_from_slice(moved);
            self.done.set(next);
        }
        let remaining = self.len - self.done.get();
        self.log.borrow_mut().push(Event::Remaining(remaining));
        remaining
    }

    fn clear_complete_flag(&mut self) {
        self.log.borrow_mut().push(Event::ClearFlag);
    }
}

pub type TestDisplay = St7789<FakeTransport, FakeChannel>;

pub fn display(log: &Log) -> TestDisplay {
    St7789::new(FakeTransport::new(log), FakeChannel::new(log, 64), Config::default())
}

pub fn display_with(log: &Log, config: Config, step: usize) -> TestDisplay {
    St7789::new(FakeTransport::new(log), FakeChannel::new(log, step), config)
}

/// One `set_window` + pixel stream, decoded from the transport log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowWrite {
    pub columns: Option<(u16, u16)>,
    pub rows: Option<(u16, u16)>,
    pub pixels: Vec<u16>,
}

fn range(data: &[u8]) -> (u16, u16) {
    (
        u16::from_be_bytes([data[0], data[1]]),
        u16::from_be_bytes([data[2], data[3]]),
    )
}

/// Split the data bytes following each command out of the log.
pub fn commands(log: &Log) -> Vec<(u8, Vec<u8>)> {
    let mut out: Vec<(u8, Vec<u8>)> = Vec::new();
    for event in log.borrow().iter() {
        match *event {
            Event::Command(c) => out.push((c, Vec::new())),
            Event::Data(d) => {
                if let Some(last) = out.last_mut() {
                    last.1.push(d);
                }
            }
            _ => {}
        }
    }
    out
}

/// Decode the log into the windows written, in order. `columns`/`rows` hold
/// the start and the transmitted (inclusive) end of each range that was
/// actually sent.
pub fn windows(log: &Log) -> Vec<WindowWrite> {
    let mut out = Vec::new();
    let mut columns = None;
    let mut rows = None;
    for (command, data) in commands(log) {
        match command {
            c if c == Instruction::ColumnAddressSet as u8 => columns = Some(range(&data)),
            c if c == Instruction::RowAddressSet as u8 => rows = Some(range(&data)),
            c if c == Instruction::MemoryWrite as u8 => {
                let pixels = data
                    .chunks(2)
                    .map(|p| u16::from_be_bytes([p[0], p[1]]))
                    .collect();
                out.push(WindowWrite {
                    columns: columns.take(),
                    rows: rows.take(),
                    pixels,
                });
            }
            _ => {}
        }
    }
    out
}

pub fn events(log: &Log) -> Vec<Event> {
    log.borrow().clone()
}
