// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::record::SequenceRecord;

// Whatever the input format, the loaders first produce a Vec of sequence records.
//

pub type SeqFile = Vec<SequenceRecord>;
