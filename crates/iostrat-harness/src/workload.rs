// iostrat - I/O strategy benchmark summariser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The measured work: touch one byte in every 512 of each input file.
//!
//! Every runner returns a wrapping checksum of the touched bytes. The value
//! itself is meaningless; it keeps the reads from being optimised away and
//! lets tests check that all strategies saw the same data.

use futures::future;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::thread;
use tokio::io::AsyncReadExt;

/// Read buffer size of the `read(2)` strategies.
pub const BUF_SIZE: usize = 1 << 16;

/// Distance between touched bytes.
pub const STEP_SIZE: usize = 512;

/// A strided scan that continues across buffer refills.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stride {
    offset: usize,
    sum: u8,
}

impl Stride {
    /// Touch every `STEP_SIZE`-th byte of the next chunk of a file.
    pub fn touch(&mut self, chunk: &[u8]) {
        while self.offset < chunk.len() {
            self.sum = self.sum.wrapping_add(chunk[self.offset]);
            self.offset += STEP_SIZE;
        }
        self.offset -= chunk.len();
    }

    pub fn sum(&self) -> u8 {
        self.sum
    }
}

/// Checksum of a whole file held in memory.
pub fn touch_bytes(bytes: &[u8]) -> u8 {
    let mut stride = Stride::default();
    stride.touch(bytes);
    stride.sum()
}

fn combine(sums: impl IntoIterator<Item = u8>) -> u8 {
    sums.into_iter().fold(0, u8::wrapping_add)
}

fn panicked() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "reader thread panicked")
}

fn read_file(mut file: File) -> io::Result<u8> {
    let mut buf = vec![0u8; BUF_SIZE];
    let mut stride = Stride::default();
    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        stride.touch(&buf[..read]);
    }
    Ok(stride.sum())
}

async fn read_file_async(mut file: tokio::fs::File) -> io::Result<u8> {
    let mut buf = vec![0u8; BUF_SIZE];
    let mut stride = Stride::default();
    loop {
        let read = file.read(&mut buf).await?;
        if read == 0 {
            break;
        }
        stride.touch(&buf[..read]);
    }
    Ok(stride.sum())
}

/// Sync, `read(2)`, one file after another.
pub fn sequential_read(files: Vec<File>) -> io::Result<u8> {
    let mut sums = Vec::with_capacity(files.len());
    for file in files {
        sums.push(read_file(file)?);
    }
    Ok(combine(sums))
}

/// Sync, `read(2)`, one thread per file.
pub fn parallel_read(files: Vec<File>) -> io::Result<u8> {
    thread::scope(|scope| -> io::Result<u8> {
        let handles: Vec<_> = files
            .into_iter()
            .map(|file| scope.spawn(move || read_file(file)))
            .collect();

        let mut sums = Vec::with_capacity(handles.len());
        for handle in handles {
            sums.push(handle.join().map_err(|_| panicked())??);
        }
        Ok(combine(sums))
    })
}

/// Sync, memory-mapped, one file after another.
pub fn sequential_mmap(maps: &[Mmap]) -> u8 {
    combine(maps.iter().map(|map| touch_bytes(map)))
}

/// Sync, memory-mapped, one thread per file.
pub fn parallel_mmap(maps: &[Mmap]) -> io::Result<u8> {
    thread::scope(|scope| -> io::Result<u8> {
        let handles: Vec<_> = maps
            .iter()
            .map(|map| scope.spawn(move || touch_bytes(map)))
            .collect();

        let mut sums = Vec::with_capacity(handles.len());
        for handle in handles {
            sums.push(handle.join().map_err(|_| panicked())?);
        }
        Ok(combine(sums))
    })
}

/// Async, `read(2)`, one file after another.
pub async fn sequential_async_read(files: Vec<File>) -> io::Result<u8> {
    let mut sums = Vec::with_capacity(files.len());
    for file in files {
        sums.push(read_file_async(tokio::fs::File::from_std(file)).await?);
    }
    Ok(combine(sums))
}

/// Async, `read(2)`, all files at once on one runtime thread.
pub async fn concurrent_async_read(files: Vec<File>) -> io::Result<u8> {
    let sums = future::try_join_all(
        files
            .into_iter()
            .map(|file| read_file_async(tokio::fs::File::from_std(file))),
    )
    .await?;
    Ok(combine(sums))
}

/// Async, memory-mapped, all files at once. Page faults block the runtime
/// thread, so the files are in practice touched one after another.
pub async fn concurrent_async_mmap(maps: &[Mmap]) -> u8 {
    let sums = future::join_all(maps.iter().map(|map| async move { touch_bytes(map) })).await;
    combine(sums)
}
