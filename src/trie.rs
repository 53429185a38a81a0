// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered prefix tree over characters.
//!
//! Each node carries a terminal marker and an optional small payload (a flag
//! table handle, never a heap graph). Children keep the order in which they
//! were first inserted, and every enumeration walks them in that order — so
//! two tries built from the same insert sequence enumerate identically, but
//! the order is *not* lexicographic and callers must not assume it is.
//!
//! Case policy lives a layer above: words are stored exactly as inserted.
//! After a backend finishes building it calls [`Trie::freeze`]; inserting
//! into a frozen trie is a programming error and panics.

use serde::Serialize;

/// One node on the character path.
#[derive(Debug, Clone, Default, Serialize)]
struct TrieNode {
    terminal: bool,
    payload: Option<u32>,
    children: Vec<(char, TrieNode)>,
}

impl TrieNode {
    fn child(&self, c: char) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, node)| node)
    }
}

/// Prefix tree with cached word count.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Trie {
    root: TrieNode,
    len: usize,
    frozen: bool,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark the trie read-only. Subsequent inserts panic.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Insert a word, creating any missing nodes along its character path.
    ///
    /// Inserting the empty string marks the root terminal. Re-inserting an
    /// existing word leaves the count unchanged (and updates the payload).
    pub fn insert(&mut self, word: &str) -> &mut Trie {
        self.insert_with(word, None)
    }

    /// Insert with an optional payload stored on the terminal node.
    pub fn insert_with(&mut self, word: &str, payload: Option<u32>) -> &mut Trie {
        assert!(!self.frozen, "insert into frozen trie");
        let mut node = &mut self.root;
        for c in word.chars() {
            let idx = match node.children.iter().position(|(ch, _)| *ch == c) {
                Some(idx) => idx,
                None => {
                    node.children.push((c, TrieNode::default()));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx].1;
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
        if payload.is_some() {
            node.payload = payload;
        }
        self
    }

    /// Unmark a word. The nodes along its path stay in place; only the
    /// terminal marker (and payload) are cleared.
    pub fn remove(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            let idx = match node.children.iter().position(|(ch, _)| *ch == c) {
                Some(idx) => idx,
                None => return false,
            };
            node = &mut node.children[idx].1;
        }
        if node.terminal {
            node.terminal = false;
            node.payload = None;
            self.len -= 1;
            true
        } else {
            false
        }
    }

    fn node_at(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Exact membership: the full path exists and ends on a terminal node.
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word).is_some_and(|n| n.terminal)
    }

    /// Payload stored with a word, if the word is present and has one.
    pub fn payload(&self, word: &str) -> Option<u32> {
        self.node_at(word).filter(|n| n.terminal)?.payload
    }

    /// Is any word stored under this prefix (including the prefix itself)?
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// All words under `prefix`, in child-insertion order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.node_at(prefix) {
            collect_words(node, &mut prefix.to_string(), &mut out, usize::MAX);
        }
        out
    }

    /// Completions for `word`: walk the longest path through the trie that
    /// matches a prefix of `word`, then enumerate words below that node
    /// until `max_results` is reached.
    pub fn suggestions(&self, word: &str, max_results: usize) -> Vec<String> {
        let mut node = &self.root;
        let mut matched = String::new();
        for c in word.chars() {
            match node.child(c) {
                Some(next) => {
                    node = next;
                    matched.push(c);
                }
                None => break,
            }
        }
        let mut out = Vec::new();
        collect_words(node, &mut matched, &mut out, max_results);
        out
    }

    /// Lazy traversal of every `(word, payload)` pair.
    pub fn iter(&self) -> Words<'_> {
        Words {
            stack: vec![Frame {
                node: &self.root,
                next: 0,
                emitted: false,
                has_char: false,
            }],
            prefix: String::new(),
        }
    }

    /// Insert every word of `other` into `self`.
    pub fn merge(&mut self, other: &Trie) -> &mut Trie {
        for (word, payload) in other.iter() {
            self.insert_with(&word, payload);
        }
        self
    }

    /// New trie holding words present in either operand.
    pub fn union(&self, other: &Trie) -> Trie {
        let mut out = Trie::new();
        out.merge(self);
        out.merge(other);
        out
    }

    /// New trie holding words present in both operands. Payloads come from
    /// `self`.
    pub fn intersect(&self, other: &Trie) -> Trie {
        let mut out = Trie::new();
        for (word, payload) in self.iter() {
            if other.contains(&word) {
                out.insert_with(&word, payload);
            }
        }
        out
    }
}

/// Depth-first collection below `node`, bounded by `max`.
fn collect_words(node: &TrieNode, prefix: &mut String, out: &mut Vec<String>, max: usize) {
    if out.len() >= max {
        return;
    }
    if node.terminal {
        out.push(prefix.clone());
    }
    for (c, child) in &node.children {
        if out.len() >= max {
            return;
        }
        prefix.push(*c);
        collect_words(child, prefix, out, max);
        prefix.pop();
    }
}

struct Frame<'a> {
    node: &'a TrieNode,
    next: usize,
    emitted: bool,
    has_char: bool,
}

/// Iterator over `(word, payload)` pairs in child-insertion order.
pub struct Words<'a> {
    stack: Vec<Frame<'a>>,
    prefix: String,
}

impl Iterator for Words<'_> {
    type Item = (String, Option<u32>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;
            if !frame.emitted {
                frame.emitted = true;
                if node.terminal {
                    return Some((self.prefix.clone(), node.payload));
                }
            }
            if frame.next < node.children.len() {
                let (c, child) = &node.children[frame.next];
                frame.next += 1;
                self.prefix.push(*c);
                self.stack.push(Frame {
                    node: child,
                    next: 0,
                    emitted: false,
                    has_char: true,
                });
            } else if let Some(done) = self.stack.pop() {
                if done.has_char {
                    self.prefix.pop();
                }
            }
        }
    }
}
