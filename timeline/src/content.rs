//! Canned text shown by the timelines: snippet pools, design-system labels,
//! and the three code previews of the primary script.

pub const CONFIG_SNIPPETS: [&str; 3] = [
    r#"// tailwind.config.js
module.exports = {
  content: [
    "./src/**/*.{js,jsx,ts,tsx}",
  ],
  theme: {
    extend: {
      colors: {
        primary: {
          50: '#f0f9ff',
          100: '#e0f2fe',
          // ...more colors
        },
      },
    },
  },
  plugins: [],
}"#,
    r#"// tsconfig.json
{
  "compilerOptions": {
    "target": "ES2020",
    "lib": ["DOM", "DOM.Iterable", "ESNext"],
    "module": "ESNext",
    "skipLibCheck": true,
    "moduleResolution": "bundler",
    // ...more options
  },
  "include": ["src"],
  "references": [{ "path": "./tsconfig.node.json" }]
}"#,
    r"// vite.config.ts
import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
  resolve: {
    alias: {
      '@': '/src',
    },
  },
})",
];

pub const COMPONENT_SNIPPETS: [&str; 3] = [
    r"// Button.tsx
import { ButtonHTMLAttributes } from 'react';
import { cva, type VariantProps } from 'class-variance-authority';
import { cn } from '@/lib/utils';

const buttonVariants = cva(
  'inline-flex items-center justify-center rounded-md text-sm font-medium',
  {
    variants: {
      variant: {
        default: 'bg-primary-600 text-white hover:bg-primary-700',
        outline: 'border border-primary-200 hover:bg-primary-100',
        // ...more variants
      },
      size: {
        default: 'h-10 px-4 py-2',
        sm: 'h-8 px-3',
        lg: 'h-12 px-6',
      },
    },
    defaultVariants: {
      variant: 'default',
      size: 'default',
    },
  }
);",
    r#"// Card.tsx
import { ReactNode } from 'react';

interface CardProps {
  title?: string;
  children: ReactNode;
  className?: string;
}

export function Card({ title, children, className }: CardProps) {
  return (
    <div className={`bg-white rounded-lg shadow-md ${className}`}>
      {title && (
        <div className="border-b px-4 py-3">
          <h3 className="font-medium">{title}</h3>
        </div>
      )}
      <div className="p-4">{children}</div>
    </div>
  );
}"#,
    r#"// Input.tsx
import { InputHTMLAttributes } from 'react';
import { cn } from '@/lib/utils';

interface InputProps extends InputHTMLAttributes<HTMLInputElement> {
  label?: string;
  error?: string;
}

export function Input({ label, error, className, ...props }: InputProps) {
  return (
    <div className="space-y-1">
      {label && (
        <label className="text-sm font-medium">
          {label}
        </label>
      )}
      <input
        className={cn(
          "flex h-10 w-full rounded-md border border-input px-3 py-2",
          error && "border-red-500",
          className
        )}
        {...props}
      />
      {error && <p className="text-sm text-red-500">{error}</p>}
    </div>
  );
}"#,
];

pub const UTIL_SNIPPETS: [&str; 3] = [
    r"// utils.ts
import { clsx, type ClassValue } from 'clsx';
import { twMerge } from 'tailwind-merge';

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}

export function formatDate(date: Date) {
  return new Intl.DateTimeFormat('en-US', {
    month: 'long',
    day: 'numeric',
    year: 'numeric',
  }).format(date);
}",
    r"// hooks.ts
import { useState, useEffect } from 'react';

export function useLocalStorage<T>(key: string, initialValue: T) {
  const [value, setValue] = useState<T>(() => {
    if (typeof window === 'undefined') return initialValue;

    try {
      const item = window.localStorage.getItem(key);
      return item ? JSON.parse(item) : initialValue;
    } catch (error) {
      console.error(error);
      return initialValue;
    }
  });

  useEffect(() => {
    if (typeof window !== 'undefined') {
      window.localStorage.setItem(key, JSON.stringify(value));
    }
  }, [key, value]);

  return [value, setValue] as const;
}",
    r"// api.ts
export async function fetchData<T>(url: string): Promise<T> {
  const response = await fetch(url);

  if (!response.ok) {
    throw new Error(`API Error: ${response.status}`);
  }

  return response.json();
}",
];

/// Design-system label streamed by the walkthrough, one per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignLabel {
    pub name: &'static str,
    pub description: &'static str,
    /// Swatch shown next to the label, when it has one.
    pub color: Option<&'static str>,
}

pub const DESIGN_LABELS: [DesignLabel; 8] = [
    DesignLabel { name: "Colors", description: "Primary and accent color palettes", color: Some("#4f46e5") },
    DesignLabel { name: "Typography", description: "Font families and sizes", color: None },
    DesignLabel { name: "Spacing", description: "Consistent spacing units", color: None },
    DesignLabel { name: "Shadows", description: "Elevation system", color: None },
    DesignLabel { name: "Border Radius", description: "Consistent rounding", color: None },
    DesignLabel { name: "Breakpoints", description: "Responsive design system", color: None },
    DesignLabel { name: "Animation", description: "Motion principles", color: None },
    DesignLabel { name: "Components", description: "Reusable UI elements", color: None },
];

pub const TAILWIND_PREVIEW: &str = r#"module.exports = {
  theme: {
    extend: {
      colors: {
        primary: {
          50: '#f0f9ff',
          500: '#0ea5e9',
          900: '#0c4a6e',
        },
        secondary: {
          400: '#e879f9',
          500: '#d946ef',
        }
      },
      fontFamily: {
        sans: ['Inter', 'sans-serif'],
        mono: ['"JetBrains Mono"', 'monospace'],
      }
    }
  }
}"#;

pub const BUTTON_PREVIEW: &str = r"import React from 'react';
import clsx from 'clsx';

type ButtonVariant = 'primary' | 'secondary' | 'outline';
type ButtonSize = 'sm' | 'md' | 'lg';

interface ButtonProps extends React.ButtonHTMLAttributes<HTMLButtonElement> {
  variant?: ButtonVariant;
  size?: ButtonSize;
  isLoading?: boolean;
  children: React.ReactNode;
}

export const Button = ({
  variant = 'primary',
  size = 'md',
  isLoading = false,
  children,
  className,
  ...props
}: ButtonProps) => {
  return (
    <button
      className={clsx(
        'rounded-md font-medium transition-all',
        {
          'bg-primary-500 hover:bg-primary-600 text-white': variant === 'primary',
          'bg-secondary-500 hover:bg-secondary-600 text-white': variant === 'secondary',
          'border border-gray-300 hover:border-gray-400': variant === 'outline',
          'px-2.5 py-1.5 text-sm': size === 'sm',
          'px-4 py-2': size === 'md',
          'px-5 py-2.5 text-lg': size === 'lg',
          'opacity-80 cursor-not-allowed': isLoading,
        },
        className
      )}
      disabled={isLoading}
      {...props}
    >
      {isLoading ? 'Loading...' : children}
    </button>
  );
};";

pub const CARD_PREVIEW: &str = r#"import React from 'react';
import clsx from 'clsx';

interface CardProps {
  title?: string;
  children: React.ReactNode;
  className?: string;
  footer?: React.ReactNode;
}

export const Card = ({
  title,
  children,
  className,
  footer
}: CardProps) => {
  return (
    <div className={clsx(
      'bg-white dark:bg-gray-800 rounded-lg shadow-md overflow-hidden',
      className
    )}>
      {title && (
        <div className="px-4 py-3 border-b border-gray-200 dark:border-gray-700">
          <h3 className="text-lg font-medium text-gray-900 dark:text-white">{title}</h3>
        </div>
      )}
      <div className="p-4">
        {children}
      </div>
      {footer && (
        <div className="px-4 py-3 bg-gray-50 dark:bg-gray-900 border-t border-gray-200 dark:border-gray-700">
          {footer}
        </div>
      )}
    </div>
  );
};"#;
