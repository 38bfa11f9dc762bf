//! 动态过滤查询构建
//!
//! 固定的可选谓词槽位，全部以位置参数（`$1`, `$2`, ...）绑定。
//! 列名只来自代码常量，不接受请求输入。

use sqlx::{Encode, Postgres, QueryBuilder, Type};

/// 可选谓词组合器
pub struct FilterBuilder<'args> {
    builder: QueryBuilder<'args, Postgres>,
    has_predicate: bool,
}

impl<'args> FilterBuilder<'args> {
    /// `base` 为不带 WHERE 的 SELECT 语句
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            builder: QueryBuilder::new(base),
            has_predicate: false,
        }
    }

    fn push_predicate<T>(&mut self, column: &'static str, op: &'static str, value: T)
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        self.builder
            .push(if self.has_predicate { " AND " } else { " WHERE " })
            .push(column)
            .push(op)
            .push_bind(value);
        self.has_predicate = true;
    }

    /// `column = $n`
    pub fn eq<T>(&mut self, column: &'static str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Some(value) = value {
            self.push_predicate(column, " = ", value);
        }
        self
    }

    /// `column >= $n`
    pub fn gte<T>(&mut self, column: &'static str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Some(value) = value {
            self.push_predicate(column, " >= ", value);
        }
        self
    }

    /// `column <= $n`
    pub fn lte<T>(&mut self, column: &'static str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Some(value) = value {
            self.push_predicate(column, " <= ", value);
        }
        self
    }

    /// 大小写不敏感的子串匹配：`column ILIKE '%value%'`
    pub fn ilike_contains(&mut self, column: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.push_predicate(column, " ILIKE ", format!("%{}%", value));
        }
        self
    }

    /// `ORDER BY ...`，参数为代码常量
    pub fn order_by(&mut self, clause: &'static str) -> &mut Self {
        self.builder.push(" ORDER BY ").push(clause);
        self
    }

    /// `LIMIT $n OFFSET $m`
    pub fn paginate(&mut self, limit: i64, offset: i64) -> &mut Self {
        self.builder
            .push(" LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        self
    }

    /// 当前 SQL 文本
    pub fn sql(&self) -> &str {
        self.builder.sql()
    }

    /// 交出底层 QueryBuilder 以执行查询
    pub fn finish(self) -> QueryBuilder<'args, Postgres> {
        self.builder
    }
}
