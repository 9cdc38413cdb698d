//! Постраничный вывод отсортированных строк.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Номер страницы, начиная с 0
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    pub fn first(size: usize) -> Self {
        Self::new(0, size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// Пересчёт страниц: минимум одна страница, номер за концом
    /// прижимается к последней.
    pub fn compute(request: PageRequest, total_count: usize) -> Self {
        let size = request.size.max(1);
        let total_pages = if total_count == 0 {
            1
        } else {
            total_count.div_ceil(size)
        };
        let page = request.page.min(total_pages - 1);
        Self {
            page,
            size,
            total_count,
            total_pages,
        }
    }

    pub fn offset(&self) -> usize {
        self.page * self.size
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }
}

/// Вырезает страницу из уже отсортированных строк
pub fn paginate<T: Copy>(rows: &[T], request: PageRequest) -> (Vec<T>, PageInfo) {
    let info = PageInfo::compute(request, rows.len());
    let start = info.offset().min(rows.len());
    let end = start.saturating_add(info.size).min(rows.len());
    (rows[start..end].to_vec(), info)
}
