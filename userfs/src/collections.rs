use alloc::vec::Vec;

/// 槽位向量：移除元素后留下空槽，插入时优先填补编号最小的空槽
#[derive(Debug, Clone)]
pub struct SlotVec<T>(Vec<Option<T>>);

impl<T> Default for SlotVec<T> {
    fn default() -> Self {
        Self(Vec::default())
    }
}

impl<T> SlotVec<T> {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// 插入新元素至空槽位，并返回槽位的索引
    pub fn insert(&mut self, element: T) -> usize {
        let index = self.0.iter().position(Option::is_none).unwrap_or_else(|| {
            self.0.push(None);
            self.0.len() - 1
        });
        self.0[index] = Some(element);
        index
    }

    /// 取走指定槽位的元素，越界或空槽返回空
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.0.get_mut(index).and_then(Option::take)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index).and_then(Option::as_mut)
    }

    /// 遍历所有非空槽位
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.0
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|element| (index, element)))
    }

    /// 非空槽位的个数
    pub fn count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::SlotVec;

    #[test]
    fn reuse_lowest_free_slot() {
        let mut slots = SlotVec::new();
        assert_eq!(slots.insert('a'), 0);
        assert_eq!(slots.insert('b'), 1);
        assert_eq!(slots.insert('c'), 2);

        assert_eq!(slots.remove(2), Some('c'));
        assert_eq!(slots.remove(0), Some('a'));
        assert_eq!(slots.count(), 1);

        assert_eq!(slots.insert('d'), 0);
        assert_eq!(slots.insert('e'), 2);
        assert_eq!(slots.insert('f'), 3);
    }

    #[test]
    fn empty_and_out_of_range_slots() {
        let mut slots = SlotVec::new();
        let index = slots.insert(7u32);

        assert_eq!(slots.remove(index), Some(7));
        assert_eq!(slots.remove(index), None);
        assert_eq!(slots.remove(100), None);
        assert!(slots.get(index).is_none());
        assert!(slots.get_mut(42).is_none());
    }
}
