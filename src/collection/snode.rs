pub(crate) type Link<T> = Option<Box<SNode<T>>>;

/// One cell of a singly linked chain.
///
/// A cell is also a view on the sub-list starting at it: `next()` gives the
/// remainder of the chain.
pub struct SNode<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> SNode<T> {
    #[inline(always)]
    pub(crate) fn new(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }

    /// The value held by this cell
    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// # Returns
    ///  * `Some(next)` the following cell
    ///  * `None` when this is the last cell
    #[inline(always)]
    pub fn next(&self) -> Option<&SNode<T>> {
        self.next.as_deref()
    }

    #[inline(always)]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Copy-down removal: moves the successor's value and link into this cell
    /// and drops the successor.
    ///
    /// # Returns
    ///  * `Some(old_value)` the value this cell held
    ///  * `None` when there is no successor (the cell is left untouched)
    pub(crate) fn copy_down(&mut self) -> Option<T> {
        let successor = self.next.take()?;
        let SNode { value, next } = *successor;
        self.next = next;
        Some(std::mem::replace(&mut self.value, value))
    }
}

/// Unlinks and frees a whole chain without recursing through `Box` drops.
pub(crate) fn drop_chain<T>(link: &mut Link<T>) {
    let mut it = link.take();
    while let Some(mut node) = it {
        it = node.next.take();
    }
}

/// Removes the cell owned by `link`, rewiring `link` to its successor.
pub(crate) fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.take()?;
    let SNode { value, next } = *node;
    *link = next;
    Some(value)
}

/// Removes, by copy-down, every cell reachable from `link` that `matches`.
///
/// A matching last cell has no successor to copy down and is unlinked instead.
pub(crate) fn remove_where<T, F>(link: &mut Link<T>, mut matches: F)
where
    F: FnMut(&SNode<T>) -> bool,
{
    let mut cursor = link;
    loop {
        match cursor.as_deref().map(&mut matches) {
            None => return,
            Some(false) => {
                cursor = match cursor {
                    Some(node) => &mut node.next,
                    None => return,
                };
            }
            Some(true) => {
                let copied = cursor.as_deref_mut().and_then(SNode::copy_down);
                if copied.is_none() {
                    *cursor = None;
                }
            }
        }
    }
}

/// Forward iterator over the values of a chain
pub struct Iter<'a, T> {
    pub(crate) pos: Option<&'a SNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pos?;
        self.pos = current.next();
        Some(&current.value)
    }
}

/// Forward iterator over the cells of a chain
pub struct Nodes<'a, T> {
    pub(crate) pos: Option<&'a SNode<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a SNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pos?;
        self.pos = current.next();
        Some(current)
    }
}
