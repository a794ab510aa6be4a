// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::io::Write;

use crate::error::Error;
use crate::eval::LearningCurve;

/// Run parameters written at the top of a result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultHeader {
    /// Documents per window.
    pub window_size: usize,
    /// Tokens per n-gram.
    pub ngram_size: usize,
    /// Documents in the stream.
    pub num_documents: usize,
}

/// Writes a learning curve as `key=value` header lines followed by one score per line.
///
/// ```text
/// window=100
/// ngram=2
/// #emails=250
/// 0.52
/// 0.71
/// 0.8
/// ```
pub fn write_results<W: Write>(
    mut writer: W,
    header: &ResultHeader,
    curve: &LearningCurve,
) -> Result<(), Error> {
    let write = |writer: &mut W| -> std::io::Result<()> {
        writeln!(writer, "window={}", header.window_size)?;
        writeln!(writer, "ngram={}", header.ngram_size)?;
        writeln!(writer, "#emails={}", header.num_documents)?;
        for score in curve.scores() {
            writeln!(writer, "{score}")?;
        }
        writer.flush()
    };
    write(&mut writer).map_err(|err| Error::io("failed to write results", err))
}
