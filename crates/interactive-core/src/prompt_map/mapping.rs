/// Maps line numbers in the projection buffer to indices of the projection
/// spans that render primary and standard-input prompts.
///
/// Entries are kept in strictly increasing `line_number` order. The mapping
/// only ever grows at the end and shrinks from the end, so the order is a
/// matter of the caller's discipline: [`PromptLineMapping::add`] asserts it in
/// debug builds, [`PromptLineMapping::try_add`] checks it always.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptLineMapping {
    map: Vec<crate::prompt_map::entry::PromptEntry>,
    /// If true the mapping might not agree with the projection spans.
    ///
    /// The subject buffer and the projection spans cannot be edited in one
    /// atomic step, so the owner raises this between the two edits. Nothing
    /// in the mapping reads it.
    pub inconsistent_with_projections: bool,
}

/*

====================
===== CREATION =====
====================

*/

impl PromptLineMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: Vec::with_capacity(capacity),
            inconsistent_with_projections: false,
        }
    }
}

/*

====================
===== MUTATION =====
====================

*/

impl PromptLineMapping {
    /// Drops every entry. The inconsistency flag is left alone.
    pub fn clear(&mut self) {
        tracing::trace!(dropped = self.map.len(), "prompt line mapping cleared");

        self.map.clear();
    }

    /// Appends a prompt. `line_number` must be greater than the last line in
    /// the mapping.
    pub fn add(&mut self, line_number: usize, span_index: usize) {
        debug_assert!(
            self.map
                .last()
                .is_none_or(|last| last.line_number < line_number),
            "prompt line {line_number} must follow {:?}",
            self.map.last()
        );
        tracing::trace!(line_number, span_index, "prompt added");

        self.map.push(crate::prompt_map::entry::PromptEntry::new(
            line_number,
            span_index,
        ));
    }

    /// Same as [`PromptLineMapping::add`] but rejects out-of-order lines.
    ///
    /// # Errors
    ///
    /// [`crate::errors::PromptMapError::NonIncreasingLine`] if `line_number`
    /// is not greater than the last line in the mapping.
    pub fn try_add(
        &mut self,
        line_number: usize,
        span_index: usize,
    ) -> crate::errors::PromptMapResult<()> {
        if let Some(last) = self.map.last()
            && last.line_number >= line_number
        {
            return Err(crate::errors::PromptMapError::NonIncreasingLine {
                line_number,
                last: last.line_number,
            });
        }

        self.add(line_number, span_index);

        Ok(())
    }

    /// Removes the most recently added prompt, e.g. when an edit that
    /// introduced it is rolled back.
    ///
    /// # Errors
    ///
    /// [`crate::errors::PromptMapError::EmptyMapping`] if there is nothing to
    /// remove.
    pub fn remove_last(
        &mut self,
    ) -> crate::errors::PromptMapResult<crate::prompt_map::entry::PromptEntry> {
        let removed = self
            .map
            .pop()
            .ok_or(crate::errors::PromptMapError::EmptyMapping)?;

        tracing::trace!(
            line_number = removed.line_number,
            span_index = removed.span_index,
            "prompt removed"
        );

        Ok(removed)
    }

    /// Replaces the entry at ordinal `index`.
    ///
    /// Only the span index is expected to change; a new line number must still
    /// sit strictly between its neighbours (asserted in debug builds).
    ///
    /// # Errors
    ///
    /// [`crate::errors::PromptMapError::IndexOutOfBounds`] if `index >= len`.
    pub fn set(
        &mut self,
        index: usize,
        entry: crate::prompt_map::entry::PromptEntry,
    ) -> crate::errors::PromptMapResult<()> {
        let len = self.map.len();

        if index >= len {
            return Err(crate::errors::PromptMapError::IndexOutOfBounds { index, len });
        }

        debug_assert!(
            index == 0 || self.map[index - 1].line_number < entry.line_number,
            "prompt line {} would precede its predecessor",
            entry.line_number
        );
        debug_assert!(
            index + 1 == len || entry.line_number < self.map[index + 1].line_number,
            "prompt line {} would follow its successor",
            entry.line_number
        );

        self.map[index] = entry;

        Ok(())
    }

    /// Points the prompt at ordinal `index` to a different projection span.
    ///
    /// # Errors
    ///
    /// [`crate::errors::PromptMapError::IndexOutOfBounds`] if `index >= len`.
    pub fn set_span_index(
        &mut self,
        index: usize,
        span_index: usize,
    ) -> crate::errors::PromptMapResult<()> {
        let len = self.map.len();
        let entry = self
            .map
            .get_mut(index)
            .ok_or(crate::errors::PromptMapError::IndexOutOfBounds { index, len })?;

        entry.span_index = span_index;

        Ok(())
    }
}

/*

======================
======= GETTER =======
======================

*/

impl PromptLineMapping {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// # Errors
    ///
    /// [`crate::errors::PromptMapError::IndexOutOfBounds`] if `index >= len`.
    pub fn get(
        &self,
        index: usize,
    ) -> crate::errors::PromptMapResult<crate::prompt_map::entry::PromptEntry> {
        self.map
            .get(index)
            .copied()
            .ok_or(crate::errors::PromptMapError::IndexOutOfBounds {
                index,
                len: self.map.len(),
            })
    }

    #[must_use]
    pub fn last(&self) -> Option<crate::prompt_map::entry::PromptEntry> {
        self.map.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, crate::prompt_map::entry::PromptEntry> {
        self.map.iter()
    }
}

impl std::ops::Index<usize> for PromptLineMapping {
    type Output = crate::prompt_map::entry::PromptEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.map[index]
    }
}

impl<'a> IntoIterator for &'a PromptLineMapping {
    type Item = &'a crate::prompt_map::entry::PromptEntry;
    type IntoIter = std::slice::Iter<'a, crate::prompt_map::entry::PromptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

/*

======================
======= SEARCH =======
======================

*/

impl PromptLineMapping {
    /// Binary search for the prompt located on `line_number`.
    ///
    /// If no prompt starts on that line, returns the closest preceding prompt.
    /// A line before the first prompt resolves to the first prompt.
    ///
    /// # Errors
    ///
    /// [`crate::errors::PromptMapError::EmptyMapping`] if there are no prompts.
    pub fn find_index_for_line(
        &self,
        line_number: usize,
    ) -> crate::errors::PromptMapResult<usize> {
        let mut start = 0;
        let mut end = self
            .map
            .len()
            .checked_sub(1)
            .ok_or(crate::errors::PromptMapError::EmptyMapping)?;

        loop {
            debug_assert!(start <= end);

            let mid = start + (end - start) / 2;
            let key = self.map[mid].line_number;

            if line_number == key {
                return Ok(mid);
            }

            // The window is down to `start` and possibly `end == start + 1`.
            if mid == start {
                debug_assert!(start == end || start + 1 == end);

                return Ok(if line_number >= self.map[end].line_number {
                    end
                } else {
                    mid
                });
            }

            // Keep `mid` in the window: it may be the closest preceding prompt.
            if line_number > key {
                start = mid;
            } else {
                end = mid;
            }
        }
    }

    /// The prompt that owns `line_number`, see
    /// [`PromptLineMapping::find_index_for_line`].
    ///
    /// # Errors
    ///
    /// [`crate::errors::PromptMapError::EmptyMapping`] if there are no prompts.
    pub fn entry_for_line(
        &self,
        line_number: usize,
    ) -> crate::errors::PromptMapResult<crate::prompt_map::entry::PromptEntry> {
        let index = self.find_index_for_line(line_number)?;

        self.get(index)
    }
}

/*

=====================
===== DIAGNOSTIC ====
=====================

*/

impl PromptLineMapping {
    /// Logs every entry at debug level. Does nothing in release builds.
    pub fn dump(&self, name: &str) {
        if cfg!(debug_assertions) {
            tracing::debug!("PLM ({name}): {self}");
        }
    }
}

impl std::fmt::Display for PromptLineMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.map {
            write!(f, "{entry}; ")?;
        }

        Ok(())
    }
}
