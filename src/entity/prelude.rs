//! 预导入模块，方便使用

pub use super::attendances::{
    ActiveModel as AttendanceActiveModel, Entity as Attendances, Model as AttendanceModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::course_students::{
    ActiveModel as CourseStudentActiveModel, Entity as CourseStudents,
    Model as CourseStudentModel,
};
pub use super::courses::{
    ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel,
};
pub use super::employee_rates::{
    ActiveModel as EmployeeRateActiveModel, Entity as EmployeeRates, Model as EmployeeRateModel,
};
pub use super::payrolls::{
    ActiveModel as PayrollActiveModel, Entity as Payrolls, Model as PayrollModel,
};
pub use super::salaries::{
    ActiveModel as SalaryActiveModel, Entity as Salaries, Model as SalaryModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
